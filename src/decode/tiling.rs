//! An internal module that scatters decoded 4x4 blocks into a row-major
//! raster.

use crate::{cast, Channels, Format, PixelBlock, RasterLayout};

use super::{decode_alpha_block, decode_color_block, decode_punchthrough_block};

/// Images with fewer block rows are always decoded on the calling thread.
#[cfg(feature = "rayon")]
const MIN_PARALLEL_BLOCK_ROWS: usize = 8;

type DecodeBlockFn<const N: usize> = fn(&[u8; N]) -> PixelBlock;

fn decode_rgba_eac(block: &[u8; 16]) -> PixelBlock {
    let [alpha, color] = cast::split_halves(block);
    let mut pixels = decode_color_block(color);
    decode_alpha_block(alpha, &mut pixels);
    pixels
}

/// Decodes all blocks of `source` into `dest`.
///
/// The caller must have verified both buffers with
/// [`RasterLayout::check_buffers`].
pub(crate) fn decode_image(source: &[u8], dest: &mut [u8], layout: &RasterLayout, parallel: bool) {
    match layout.format() {
        Format::ETC1_RGB8 | Format::ETC2_RGB8 => {
            for_each_block_row::<8>(source, dest, layout, parallel, decode_color_block)
        }
        Format::ETC2_RGB8_PUNCHTHROUGH_ALPHA1 => {
            for_each_block_row::<8>(source, dest, layout, parallel, decode_punchthrough_block)
        }
        Format::ETC2_RGBA8_EAC => {
            for_each_block_row::<16>(source, dest, layout, parallel, decode_rgba_eac)
        }
    }
}

fn for_each_block_row<const N: usize>(
    source: &[u8],
    dest: &mut [u8],
    layout: &RasterLayout,
    parallel: bool,
    decode_block: DecodeBlockFn<N>,
) where
    [u8; N]: cast::Castable,
{
    debug_assert_eq!(layout.format().bytes_per_block() as usize, N);

    let source_row_len = layout.source_row_len();
    let dest_row_len = layout.dest_row_len();
    if source_row_len == 0 || dest_row_len == 0 {
        return;
    }

    let source = &source[..layout.source_len()];
    let dest = &mut dest[..layout.dest_len()];

    #[cfg(feature = "rayon")]
    if parallel && layout.blocks().1 >= MIN_PARALLEL_BLOCK_ROWS {
        use rayon::prelude::*;

        source
            .par_chunks_exact(source_row_len)
            .zip(dest.par_chunks_exact_mut(dest_row_len))
            .for_each(|(encoded, decoded)| {
                decode_block_row(cast::as_blocks(encoded), decoded, layout, decode_block)
            });
        return;
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    for (encoded, decoded) in source
        .chunks_exact(source_row_len)
        .zip(dest.chunks_exact_mut(dest_row_len))
    {
        decode_block_row(cast::as_blocks(encoded), decoded, layout, decode_block);
    }
}

/// Decodes one row of blocks into the 4 pixel rows of `decoded`.
///
/// Pixels right of the row pitch are dropped. Pixels below the image are
/// written into the padding rows of `decoded`.
fn decode_block_row<const N: usize>(
    encoded: &[[u8; N]],
    decoded: &mut [u8],
    layout: &RasterLayout,
    decode_block: DecodeBlockFn<N>,
) {
    let row_pitch = layout.row_pitch();
    let pitch_pixels = layout.pitch_pixels();
    let channels = layout.channels();
    let bytes_per_pixel = channels.bytes_per_pixel() as usize;

    for (block_index, block) in encoded.iter().enumerate() {
        let x = block_index * 4;
        let block_w = (pitch_pixels - x).min(4);
        let pixels = decode_block(block);

        for y in 0..4 {
            let row_start = y * row_pitch + x * bytes_per_pixel;
            let row = &mut decoded[row_start..row_start + block_w * bytes_per_pixel];
            match channels {
                Channels::Rgba => row.copy_from_slice(&pixels.row_bytes(y)[..block_w * 4]),
                Channels::Rgb => {
                    for (out, pixel) in row.chunks_exact_mut(3).zip(pixels.row(y)) {
                        out.copy_from_slice(&pixel[..3]);
                    }
                }
            }
        }
    }
}
