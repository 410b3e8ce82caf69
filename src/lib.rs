//! Decoders for the ETC1 and ETC2/EAC block-compressed texture formats.
//!
//! The crate exposes two levels of API:
//!
//! - Block decoders ([`decode_color_block`], [`decode_punchthrough_block`],
//!   [`decode_alpha_block`]) that turn a single compressed 4x4 block into a
//!   [`PixelBlock`].
//! - Image transcoders ([`transcode`] and the `transcode_*` shortcuts) that
//!   decode a whole image into an RGBA8 or RGB8 raster.
//!
//! ```
//! use etc2::{transcode, Channels, Format, Options, RasterLayout, Size};
//!
//! # fn main() -> Result<(), etc2::TranscodeError> {
//! let size = Size::new(6, 6);
//! let etc2_data = vec![0_u8; 4 * 8];
//!
//! let layout = RasterLayout::new(size, Format::ETC2_RGB8, Channels::Rgba)?;
//! let mut pixels = vec![0_u8; layout.dest_len()];
//! transcode(
//!     &etc2_data,
//!     &mut pixels,
//!     size,
//!     Format::ETC2_RGB8,
//!     Channels::Rgba,
//!     &Options::default(),
//! )?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod cast;
mod decode;
mod error;
mod format;
mod gl;
mod layout;
mod pixel;
mod util;

pub use decode::{
    color_block_mode, decode_alpha_block, decode_color_block, decode_punchthrough_block,
    ColorMode,
};
pub use error::*;
pub use format::*;
pub use gl::*;
pub use layout::*;
pub use pixel::*;

/// Additional options for transcoding.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Options {
    /// Whether to use rayon for parallel decoding.
    ///
    /// Block rows are independent, so large images are split into block rows
    /// that are decoded on rayon's thread pool. The output is identical to
    /// sequential decoding. Small images are always decoded on the calling
    /// thread.
    ///
    /// This option has no effect without the `rayon` feature.
    ///
    /// Defaults to `true`.
    pub parallel: bool,
}
impl Default for Options {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Decodes an ETC-compressed image into a row-major raster.
///
/// `source` holds the compressed blocks in row-major block order. `dest`
/// receives the decoded pixels with the row pitch and padding described by
/// [`RasterLayout`]. Use [`RasterLayout::dest_len`] to size the destination
/// buffer.
///
/// Both buffers are checked before anything is written to `dest`. Trailing
/// bytes of either buffer are ignored. Images with a width or height of 0
/// decode nothing.
pub fn transcode(
    source: &[u8],
    dest: &mut [u8],
    size: Size,
    format: Format,
    channels: Channels,
    options: &Options,
) -> Result<(), TranscodeError> {
    tracing::debug!(
        width = size.width,
        height = size.height,
        format = ?format,
        channels = ?channels,
        parallel = options.parallel,
        "transcoding ETC image"
    );

    let layout = RasterLayout::new(size, format, channels)?;
    if size.is_empty() {
        return Ok(());
    }
    layout.check_buffers(source, dest)?;

    decode::decode_image(source, dest, &layout, options.parallel);
    Ok(())
}

fn transcode_with(
    source: &[u8],
    dest: &mut [u8],
    width: u32,
    height: u32,
    format: Format,
    channels: Channels,
) -> Result<(), TranscodeError> {
    transcode(
        source,
        dest,
        Size::new(width, height),
        format,
        channels,
        &Options::default(),
    )
}

/// Decodes ETC1 or ETC2 RGB data into RGBA8 pixels with an alpha of 255.
pub fn transcode_etc2_to_rgba8(
    source: &[u8],
    dest: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), TranscodeError> {
    transcode_with(source, dest, width, height, Format::ETC2_RGB8, Channels::Rgba)
}

/// Decodes ETC1 or ETC2 RGB data into RGB8 pixels.
pub fn transcode_etc2_to_rgb8(
    source: &[u8],
    dest: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), TranscodeError> {
    transcode_with(source, dest, width, height, Format::ETC2_RGB8, Channels::Rgb)
}

/// Decodes ETC2 RGBA data with EAC alpha into RGBA8 pixels.
pub fn transcode_etc2_eac_to_rgba8(
    source: &[u8],
    dest: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), TranscodeError> {
    transcode_with(source, dest, width, height, Format::ETC2_RGBA8_EAC, Channels::Rgba)
}

/// Decodes ETC2 RGBA data with EAC alpha into RGB8 pixels, dropping alpha.
pub fn transcode_etc2_eac_to_rgb8(
    source: &[u8],
    dest: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), TranscodeError> {
    transcode_with(source, dest, width, height, Format::ETC2_RGBA8_EAC, Channels::Rgb)
}

/// Decodes ETC2 RGB data with 1-bit punch-through alpha into RGBA8 pixels.
///
/// Transparent pixels are written as `[0, 0, 0, 0]`.
pub fn transcode_etc2_punchthrough_to_rgba8(
    source: &[u8],
    dest: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), TranscodeError> {
    transcode_with(
        source,
        dest,
        width,
        height,
        Format::ETC2_RGB8_PUNCHTHROUGH_ALPHA1,
        Channels::Rgba,
    )
}
