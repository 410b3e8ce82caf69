use crate::cast;

/// A single RGBA8 pixel, stored as `[r, g, b, a]`.
pub type Rgba8 = [u8; 4];

/// A 4x4 block of RGBA8 pixels.
///
/// This is the unit of work of all block decoders in this crate. Pixels are
/// stored in row-major order, so the pixel at `(x, y)` has the linear index
/// `y * 4 + x`.
///
/// Note that the ETC formats themselves address pixels in column-major order
/// (`x * 4 + y`). The decoders take care of this, so users of this type never
/// have to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelBlock {
    pixels: [Rgba8; 16],
}

impl PixelBlock {
    /// The width of a block in pixels.
    pub const WIDTH: usize = 4;
    /// The height of a block in pixels.
    pub const HEIGHT: usize = 4;

    /// Creates a block where all pixels are transparent black.
    pub const fn new() -> Self {
        Self {
            pixels: [[0; 4]; 16],
        }
    }
    /// Creates a block from 16 pixels in row-major order.
    pub const fn from_pixels(pixels: [Rgba8; 16]) -> Self {
        Self { pixels }
    }
    /// Creates a block by calling `f(x, y)` for every pixel.
    ///
    /// Pixels are visited in row-major order.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Rgba8) -> Self {
        let mut block = Self::new();
        for y in 0..Self::HEIGHT {
            for x in 0..Self::WIDTH {
                block.pixels[y * Self::WIDTH + x] = f(x, y);
            }
        }
        block
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not less than 4.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        assert!(x < Self::WIDTH && y < Self::HEIGHT);
        self.pixels[y * Self::WIDTH + x]
    }
    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not less than 4.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: Rgba8) {
        assert!(x < Self::WIDTH && y < Self::HEIGHT);
        self.pixels[y * Self::WIDTH + x] = pixel;
    }
    /// Sets only the alpha channel of the pixel at `(x, y)`.
    #[inline]
    pub fn set_alpha(&mut self, x: usize, y: usize, alpha: u8) {
        assert!(x < Self::WIDTH && y < Self::HEIGHT);
        self.pixels[y * Self::WIDTH + x][3] = alpha;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba8; 16] {
        &self.pixels
    }
    pub fn pixels_mut(&mut self) -> &mut [Rgba8; 16] {
        &mut self.pixels
    }

    /// The 4 pixels of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Rgba8] {
        &self.pixels[y * Self::WIDTH..(y + 1) * Self::WIDTH]
    }
    /// The 16 bytes of row `y`.
    #[inline]
    pub fn row_bytes(&self, y: usize) -> &[u8] {
        cast::as_bytes(self.row(y))
    }
    /// The raw RGBA8 bytes of all pixels in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        cast::as_bytes(&self.pixels)
    }

    /// Returns the pixels with the alpha channel dropped.
    pub fn to_rgb(&self) -> [[u8; 3]; 16] {
        self.pixels.map(|[r, g, b, _]| [r, g, b])
    }
    /// Returns the alpha channel of all pixels in row-major order.
    pub fn alpha(&self) -> [u8; 16] {
        self.pixels.map(|p| p[3])
    }
}

impl Default for PixelBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Rgba8; 16]> for PixelBlock {
    fn from(pixels: [Rgba8; 16]) -> Self {
        Self::from_pixels(pixels)
    }
}
