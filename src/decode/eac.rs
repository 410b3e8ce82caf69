//! Decoding of EAC alpha blocks (the alpha half of `RGBA8_ETC2_EAC`).
//!
//! https://registry.khronos.org/OpenGL/specs/es/3.0/es_spec_3.0.pdf (Appendix C.1.3)
//!
//! ```text
//!  63..56          55..52       51..48        47..0
//! | base codeword | multiplier | table index | 16 x 3-bit pixel indexes (a..p) |
//! ```
//!
//! The pixel indexes are stored MSB first and in column-major order: `a` is
//! pixel (0, 0), `b` is pixel (0, 1), `e` is pixel (1, 0), and so on.

use super::convert::clamp;
use crate::PixelBlock;

/// Table C.16 of OpenGL ES 3.0 (intensity modifier sets for alpha).
const ALPHA_MODIFIERS: [[i32; 8]; 16] = [
    [-3, -6, -9, -15, 2, 5, 8, 14],
    [-3, -7, -10, -13, 2, 6, 9, 12],
    [-2, -5, -8, -13, 1, 4, 7, 12],
    [-2, -4, -6, -13, 1, 3, 5, 12],
    [-3, -6, -8, -12, 2, 5, 7, 11],
    [-3, -7, -9, -11, 2, 6, 8, 10],
    [-4, -7, -8, -11, 3, 6, 7, 10],
    [-3, -5, -8, -11, 2, 4, 7, 10],
    [-2, -6, -8, -10, 1, 5, 7, 9],
    [-2, -5, -8, -10, 1, 4, 7, 9],
    [-2, -4, -8, -10, 1, 3, 7, 9],
    [-2, -5, -7, -10, 1, 4, 6, 9],
    [-3, -4, -7, -10, 2, 3, 6, 9],
    [-1, -2, -3, -10, 0, 1, 2, 9],
    [-4, -6, -8, -9, 3, 5, 7, 8],
    [-3, -5, -7, -9, 2, 4, 6, 8],
];

/// Decodes an EAC alpha block into 16 alpha values in row-major order.
pub(crate) fn decode_alpha_values(block: &[u8; 8]) -> [u8; 16] {
    let base = i32::from(block[0]);
    let multiplier = i32::from(block[1] >> 4);
    let modifiers = &ALPHA_MODIFIERS[(block[1] & 0xF) as usize];
    let bits = u64::from_be_bytes(*block);

    let mut alpha = [0; 16];
    for x in 0..4 {
        for y in 0..4 {
            let shift = 45 - 3 * (x * 4 + y);
            let index = ((bits >> shift) & 0x7) as usize;
            alpha[y * 4 + x] = clamp(base + multiplier * modifiers[index]);
        }
    }
    alpha
}

/// Decodes an EAC alpha block and writes the result into the alpha channel of
/// the given pixels.
///
/// The color channels of `pixels` are left untouched. Since
/// [`decode_color_block`](crate::decode_color_block) sets the alpha of all
/// pixels to 255, this function must be called **after** the color block of
/// the same 4x4 block has been decoded.
pub fn decode_alpha_block(block: &[u8; 8], pixels: &mut PixelBlock) {
    let alpha = decode_alpha_values(block);
    for (pixel, alpha) in pixels.pixels_mut().iter_mut().zip(alpha) {
        pixel[3] = alpha;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Packs 16 3-bit indexes (a..p) into the low 48 bits of an alpha block.
    fn alpha_block(base: u8, multiplier: u8, table: u8, indexes: [u8; 16]) -> [u8; 8] {
        let mut bits = (base as u64) << 56 | (multiplier as u64) << 52 | (table as u64) << 48;
        for (k, index) in indexes.into_iter().enumerate() {
            bits |= (index as u64) << (45 - 3 * k);
        }
        bits.to_be_bytes()
    }

    #[test]
    fn header_fields() {
        // table 13 has a modifier of 0 at index 4
        let block = alpha_block(200, 3, 13, [4; 16]);
        assert_eq!(block[0], 200);
        assert_eq!(block[1], 0x3D);
        assert_eq!(decode_alpha_values(&block), [200; 16]);

        // multiplier 3, table 0, index 7 => 200 + 3 * 14
        let block = alpha_block(200, 3, 0, [7; 16]);
        assert_eq!(decode_alpha_values(&block), [242; 16]);
    }

    #[test]
    fn column_major_pixel_order() {
        // table 13, multiplier 1: indexes 4, 5, 6, 7 add 0, 1, 2, 9
        let mut indexes = [4; 16];
        indexes[1] = 5; // b => (0, 1)
        indexes[4] = 6; // e => (1, 0)
        indexes[15] = 7; // p => (3, 3)
        let block = alpha_block(100, 1, 13, indexes);

        let mut expected = [100; 16];
        expected[4] = 101; // (0, 1)
        expected[1] = 102; // (1, 0)
        expected[15] = 109; // (3, 3)
        assert_eq!(decode_alpha_values(&block), expected);
    }

    #[test]
    fn saturates() {
        let block = alpha_block(250, 15, 0, [7; 16]);
        assert_eq!(decode_alpha_values(&block), [255; 16]);

        let block = alpha_block(5, 15, 0, [3; 16]);
        assert_eq!(decode_alpha_values(&block), [0; 16]);
    }

    #[test]
    fn only_alpha_is_written() {
        let mut pixels = PixelBlock::from_fn(|x, y| [x as u8, y as u8, 7, 255]);
        let block = alpha_block(128, 0, 0, [0; 16]);
        decode_alpha_block(&block, &mut pixels);

        assert_eq!(pixels, PixelBlock::from_fn(|x, y| [x as u8, y as u8, 7, 128]));
    }
}
