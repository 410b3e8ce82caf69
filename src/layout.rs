use crate::{util::div_ceil, Channels, Format, TranscodeError};

/// The size of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}
impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The total number of pixels, `width * height`.
    pub const fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
    /// Whether the image contains no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The number of 4x4 blocks needed to cover the image horizontally and
    /// vertically.
    pub fn blocks(&self) -> (u32, u32) {
        (div_ceil(self.width, 4), div_ceil(self.height, 4))
    }
}
impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Describes where the blocks of a compressed image come from and where their
/// decoded pixels go.
///
/// Decoded images are written row by row with a fixed row pitch of
/// `max(width, 4) * bytes_per_pixel` bytes. Blocks are always decoded whole,
/// so the pixel rows below the image in the last block row must be part of the
/// destination buffer. For images narrower than 4 pixels, the row pitch
/// additionally includes the padding columns of the single block column.
///
/// ```
/// use etc2::{Channels, Format, RasterLayout, Size};
///
/// let layout = RasterLayout::new(Size::new(6, 5), Format::ETC2_RGB8, Channels::Rgba).unwrap();
/// assert_eq!(layout.blocks(), (2, 2));
/// assert_eq!(layout.row_pitch(), 24);
/// assert_eq!(layout.source_len(), 32);
/// assert_eq!(layout.dest_len(), 8 * 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RasterLayout {
    size: Size,
    format: Format,
    channels: Channels,
    blocks_x: usize,
    blocks_y: usize,
    row_pitch: usize,
    source_len: usize,
    dest_len: usize,
}
impl RasterLayout {
    /// Computes the layout of the given image.
    ///
    /// Returns [`TranscodeError::DataLayoutTooBig`] if the source or
    /// destination length can't be represented as a `usize`.
    pub fn new(size: Size, format: Format, channels: Channels) -> Result<Self, TranscodeError> {
        let (blocks_x, blocks_y) = size.blocks();
        let blocks_x = to_usize(blocks_x)?;
        let blocks_y = to_usize(blocks_y)?;
        let bytes_per_pixel = channels.bytes_per_pixel() as usize;

        let row_pitch = to_usize(size.width.max(4))?
            .checked_mul(bytes_per_pixel)
            .ok_or(TranscodeError::DataLayoutTooBig)?;
        let source_len = blocks_x
            .checked_mul(blocks_y)
            .and_then(|blocks| blocks.checked_mul(format.bytes_per_block() as usize))
            .ok_or(TranscodeError::DataLayoutTooBig)?;
        let dest_len = if size.is_empty() {
            0
        } else {
            blocks_y
                .checked_mul(4)
                .and_then(|rows| rows.checked_mul(row_pitch))
                .ok_or(TranscodeError::DataLayoutTooBig)?
        };

        Ok(Self {
            size,
            format,
            channels,
            blocks_x,
            blocks_y,
            row_pitch,
            source_len,
            dest_len,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }
    pub fn format(&self) -> Format {
        self.format
    }
    pub fn channels(&self) -> Channels {
        self.channels
    }
    /// The number of blocks horizontally and vertically.
    pub fn blocks(&self) -> (usize, usize) {
        (self.blocks_x, self.blocks_y)
    }

    /// The number of bytes between the starts of two consecutive pixel rows
    /// in the destination.
    pub fn row_pitch(&self) -> usize {
        self.row_pitch
    }
    /// The number of pixels per row in the destination.
    ///
    /// This is the image width, but at least 4.
    pub fn pitch_pixels(&self) -> usize {
        self.row_pitch / self.channels.bytes_per_pixel() as usize
    }
    /// The number of source bytes per block row.
    pub fn source_row_len(&self) -> usize {
        self.blocks_x * self.format.bytes_per_block() as usize
    }
    /// The number of destination bytes per block row, i.e. 4 pixel rows.
    pub fn dest_row_len(&self) -> usize {
        4 * self.row_pitch
    }

    /// The minimum length of the source buffer.
    pub fn source_len(&self) -> usize {
        self.source_len
    }
    /// The minimum length of the destination buffer.
    ///
    /// This includes the padding rows of the last block row. Images without
    /// any pixels need no destination at all.
    pub fn dest_len(&self) -> usize {
        self.dest_len
    }

    /// Checks that both buffers are large enough for this layout.
    pub(crate) fn check_buffers(&self, source: &[u8], dest: &[u8]) -> Result<(), TranscodeError> {
        if source.len() < self.source_len {
            return Err(TranscodeError::SourceTooSmall {
                required: self.source_len,
                actual: source.len(),
            });
        }
        if dest.len() < self.dest_len {
            return Err(TranscodeError::DestinationTooSmall {
                required: self.dest_len,
                actual: dest.len(),
            });
        }
        Ok(())
    }
}

fn to_usize(n: u32) -> Result<usize, TranscodeError> {
    usize::try_from(n).map_err(|_| TranscodeError::DataLayoutTooBig)
}
