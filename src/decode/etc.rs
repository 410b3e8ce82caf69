//! Decoding of ETC1 and ETC2 color blocks.
//!
//! https://registry.khronos.org/OpenGL/extensions/OES/OES_compressed_ETC1_RGB8_texture.txt
//! https://registry.khronos.org/OpenGL/specs/es/3.0/es_spec_3.0.pdf (Appendix C.1)
//!
//! An ETC2 color block is 64 bits. The first 32 bits hold the base colors
//! and mode flags, the last 32 bits hold 16 2-bit pixel indexes. ETC2 has no
//! dedicated mode field. Instead, the mode of a block with the diff bit set is
//! determined by whether the second (differential) base color overflows the
//! 5-bit range:
//!
//! ```text
//! diff bit  R + dR      G + dG      B + dB      mode
//! 0         -           -           -           Individual
//! 1         overflow    -           -           T
//! 1         ok          overflow    -           H
//! 1         ok          ok          overflow    Planar
//! 1         ok          ok          ok          Differential
//! ```
//!
//! ETC1 blocks are a subset of ETC2 blocks, so ETC1 data decodes correctly
//! with the same decoder.

use super::convert::{clamp, clamp_high, clamp_low, n4, n5, n6, n7, s3};
use crate::{PixelBlock, Rgba8};

/// Table C.12 of OpenGL ES 3.0 (intensity modifier sets for individual and
/// differential mode), with the columns sorted by pixel index.
const INTENSITY_MODIFIERS: [[i32; 4]; 8] = [
    [2, 8, -2, -8],
    [5, 17, -5, -17],
    [9, 29, -9, -29],
    [13, 42, -13, -42],
    [18, 60, -18, -60],
    [24, 80, -24, -80],
    [33, 106, -33, -106],
    [47, 183, -47, -183],
];

/// Table C.17 of OpenGL ES 3.0 (intensity modifier sets if the opaque bit of
/// a punch-through alpha block is unset), with the columns sorted by pixel
/// index.
const INTENSITY_MODIFIERS_NON_OPAQUE: [[i32; 4]; 8] = [
    [0, 8, 0, -8],
    [0, 17, 0, -17],
    [0, 29, 0, -29],
    [0, 42, 0, -42],
    [0, 60, 0, -60],
    [0, 80, 0, -80],
    [0, 106, 0, -106],
    [0, 183, 0, -183],
];

/// Table C.14 of OpenGL ES 3.0 (distance table for T and H modes).
const DISTANCES: [i32; 8] = [3, 6, 11, 16, 23, 32, 41, 64];

/// Pixel index 2 of a non-opaque punch-through block.
const TRANSPARENT: Rgba8 = [0, 0, 0, 0];

/// An 8-bit RGB color.
type Rgb = [u8; 3];

/// The mode of an ETC2 color block.
///
/// See the module documentation for how the mode is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Two 4-bit base colors, one per sub-block.
    Individual,
    /// A 5-bit base color and a 3-bit signed offset for the second sub-block.
    Differential,
    /// Two 4-bit base colors and a distance, with 3 paint colors derived
    /// from the second base color.
    T,
    /// Two 4-bit base colors and a distance, with 2 paint colors derived
    /// from each base color.
    H,
    /// A color gradient defined by 3 colors.
    Planar,
}

/// Returns the mode of the given ETC2 color block.
///
/// This is the mode [`decode_color_block`] will use to decode the block.
pub fn color_block_mode(block: &[u8; 8]) -> ColorMode {
    Mode::from_block(block).kind()
}

/// Decodes an ETC1 or ETC2 color block into 16 RGBA pixels.
///
/// The alpha channel of all pixels is set to 255.
pub fn decode_color_block(block: &[u8; 8]) -> PixelBlock {
    Mode::from_block(block).decode(PixelIndexes::new(block), true)
}

/// Decodes an ETC2 punch-through alpha (`RGB8_PUNCHTHROUGH_ALPHA1`) block
/// into 16 RGBA pixels.
///
/// Punch-through blocks reuse the diff bit of ETC2 color blocks as an
/// *opaque* bit. Blocks with the opaque bit set decode like regular ETC2
/// blocks, except that the individual mode doesn't exist. If the opaque bit
/// is unset, pixel index 2 becomes transparent black in all modes except
/// planar mode, and the differential mode uses a different set of intensity
/// modifiers.
///
/// All pixels have an alpha of either 0 or 255.
pub fn decode_punchthrough_block(block: &[u8; 8]) -> PixelBlock {
    let opaque = diff_bit(block);
    Mode::from_differential_block(block).decode(PixelIndexes::new(block), opaque)
}

/// The color fields of individual and differential blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubBlocks {
    colors: [Rgb; 2],
    tables: [u8; 2],
    flip: bool,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TModeFields {
    base1: Rgb,
    base2: Rgb,
    distance: u8,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HModeFields {
    base1: Rgb,
    base2: Rgb,
    /// The full 3-bit distance index, including the ordering bit.
    distance: u8,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlanarFields {
    origin: Rgb,
    horizontal: Rgb,
    vertical: Rgb,
}

/// An ETC2 color block with its fields extracted according to its mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Individual(SubBlocks),
    Differential(SubBlocks),
    T(TModeFields),
    H(HModeFields),
    Planar(PlanarFields),
}

impl Mode {
    fn from_block(block: &[u8; 8]) -> Self {
        if diff_bit(block) {
            Self::from_differential_block(block)
        } else {
            Self::Individual(individual_fields(block))
        }
    }
    /// Selects the mode of a block as if its diff bit was set.
    fn from_differential_block(block: &[u8; 8]) -> Self {
        let base = [block[0] >> 3, block[1] >> 3, block[2] >> 3];
        let [r, g, b] = [0, 1, 2].map(|i| i32::from(base[i]) + s3(block[i]));

        let out_of_range = |c: i32| !(0..32).contains(&c);
        if out_of_range(r) {
            Self::T(t_mode_fields(block))
        } else if out_of_range(g) {
            Self::H(h_mode_fields(block))
        } else if out_of_range(b) {
            Self::Planar(planar_fields(block))
        } else {
            // all values are within 0..32 at this point
            let second = [r as u8, g as u8, b as u8];
            Self::Differential(differential_fields(block, base, second))
        }
    }

    fn kind(&self) -> ColorMode {
        match self {
            Self::Individual(_) => ColorMode::Individual,
            Self::Differential(_) => ColorMode::Differential,
            Self::T(_) => ColorMode::T,
            Self::H(_) => ColorMode::H,
            Self::Planar(_) => ColorMode::Planar,
        }
    }

    fn decode(&self, indexes: PixelIndexes, opaque: bool) -> PixelBlock {
        match self {
            Self::Individual(sub_blocks) | Self::Differential(sub_blocks) => {
                sub_blocks.decode(indexes, opaque)
            }
            Self::T(fields) => decode_paint_colors(fields.paint_colors(), indexes, opaque),
            Self::H(fields) => decode_paint_colors(fields.paint_colors(), indexes, opaque),
            Self::Planar(fields) => fields.decode(),
        }
    }
}

/// The 2-bit pixel indexes of a color block.
///
/// The indexes are stored as 2 16-bit planes: first the most significant
/// bits, then the least significant bits. Each plane is big endian and bit
/// `x * 4 + y` of a plane belongs to the pixel at `(x, y)`.
#[derive(Debug, Clone, Copy)]
struct PixelIndexes {
    msb: u16,
    lsb: u16,
}
impl PixelIndexes {
    fn new(block: &[u8; 8]) -> Self {
        Self {
            msb: u16::from_be_bytes([block[4], block[5]]),
            lsb: u16::from_be_bytes([block[6], block[7]]),
        }
    }

    #[inline(always)]
    fn get(self, x: usize, y: usize) -> usize {
        let bit = x * 4 + y;
        let msb = (self.msb >> bit) & 1;
        let lsb = (self.lsb >> bit) & 1;
        ((msb << 1) | lsb) as usize
    }
}

fn diff_bit(block: &[u8; 8]) -> bool {
    block[3] & 0b10 != 0
}
fn flip_bit(block: &[u8; 8]) -> bool {
    block[3] & 0b1 != 0
}
fn table_indexes(block: &[u8; 8]) -> [u8; 2] {
    [block[3] >> 5, (block[3] >> 2) & 0x7]
}

fn individual_fields(block: &[u8; 8]) -> SubBlocks {
    let [b0, b1, b2, ..] = *block;
    SubBlocks {
        colors: [
            [b0 >> 4, b1 >> 4, b2 >> 4].map(n4::n8),
            [b0 & 0xF, b1 & 0xF, b2 & 0xF].map(n4::n8),
        ],
        tables: table_indexes(block),
        flip: flip_bit(block),
    }
}
fn differential_fields(block: &[u8; 8], base: [u8; 3], second: [u8; 3]) -> SubBlocks {
    SubBlocks {
        colors: [base.map(n5::n8), second.map(n5::n8)],
        tables: table_indexes(block),
        flip: flip_bit(block),
    }
}

fn t_mode_fields(block: &[u8; 8]) -> TModeFields {
    let [b0, b1, b2, b3, ..] = *block;

    let r1 = (((b0 >> 3) & 0x3) << 2) | (b0 & 0x3);
    TModeFields {
        base1: [r1, b1 >> 4, b1 & 0xF].map(n4::n8),
        base2: [b2 >> 4, b2 & 0xF, b3 >> 4].map(n4::n8),
        distance: (((b3 >> 2) & 0x3) << 1) | (b3 & 0x1),
    }
}

fn h_mode_fields(block: &[u8; 8]) -> HModeFields {
    let [b0, b1, b2, b3, ..] = *block;

    let r1 = (b0 >> 3) & 0xF;
    let g1 = ((b0 & 0x7) << 1) | ((b1 >> 4) & 0x1);
    let b1_ = (((b1 >> 3) & 0x1) << 3) | ((b1 & 0x3) << 1) | (b2 >> 7);
    let r2 = (b2 >> 3) & 0xF;
    let g2 = ((b2 & 0x7) << 1) | (b3 >> 7);
    let b2_ = (b3 >> 3) & 0xF;

    let base1 = [r1, g1, b1_].map(n4::n8);
    let base2 = [r2, g2, b2_].map(n4::n8);

    // The least significant bit of the distance isn't stored. It is implied
    // by the order of the two base colors.
    let ordering_bit = pack_rgb(base1) >= pack_rgb(base2);
    let distance = (((b3 >> 2) & 0x1) << 2) | ((b3 & 0x1) << 1) | ordering_bit as u8;

    HModeFields {
        base1,
        base2,
        distance,
    }
}
fn pack_rgb([r, g, b]: Rgb) -> u32 {
    u32::from_be_bytes([0, r, g, b])
}

fn planar_fields(block: &[u8; 8]) -> PlanarFields {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = *block;

    let ro = (b0 >> 1) & 0x3F;
    let go = ((b0 & 0x1) << 6) | ((b1 >> 1) & 0x3F);
    let bo = ((b1 & 0x1) << 5) | (((b2 >> 3) & 0x3) << 3) | ((b2 & 0x3) << 1) | (b3 >> 7);

    let rh = (((b3 >> 2) & 0x1F) << 1) | (b3 & 0x1);
    let gh = b4 >> 1;
    let bh = ((b4 & 0x1) << 5) | (b5 >> 3);

    let rv = ((b5 & 0x7) << 3) | (b6 >> 5);
    let gv = ((b6 & 0x1F) << 2) | (b7 >> 6);
    let bv = b7 & 0x3F;

    PlanarFields {
        origin: [n6::n8(ro), n7::n8(go), n6::n8(bo)],
        horizontal: [n6::n8(rh), n7::n8(gh), n6::n8(bh)],
        vertical: [n6::n8(rv), n7::n8(gv), n6::n8(bv)],
    }
}

#[inline(always)]
fn opaque([r, g, b]: Rgb) -> Rgba8 {
    [r, g, b, 255]
}

impl SubBlocks {
    fn decode(&self, indexes: PixelIndexes, opaque: bool) -> PixelBlock {
        let modifiers = if opaque {
            &INTENSITY_MODIFIERS
        } else {
            &INTENSITY_MODIFIERS_NON_OPAQUE
        };
        let palettes = [0, 1].map(|i| {
            let row = &modifiers[self.tables[i] as usize];
            let mut palette = row.map(|m| {
                let [r, g, b] = self.colors[i].map(|c| clamp(i32::from(c) + m));
                [r, g, b, 255]
            });
            if !opaque {
                palette[2] = TRANSPARENT;
            }
            palette
        });

        PixelBlock::from_fn(|x, y| {
            // flipped: two 4x2 sub-blocks on top of each other
            // not flipped: two 2x4 sub-blocks side by side
            let second = if self.flip { y >= 2 } else { x >= 2 };
            palettes[second as usize][indexes.get(x, y)]
        })
    }
}

impl TModeFields {
    fn paint_colors(&self) -> [Rgba8; 4] {
        let d = DISTANCES[self.distance as usize];
        [
            opaque(self.base1),
            opaque(self.base2.map(|c| clamp_high(i32::from(c) + d))),
            opaque(self.base2),
            opaque(self.base2.map(|c| clamp_low(i32::from(c) - d))),
        ]
    }
}

impl HModeFields {
    fn paint_colors(&self) -> [Rgba8; 4] {
        let d = DISTANCES[self.distance as usize];
        [
            opaque(self.base1.map(|c| clamp_high(i32::from(c) + d))),
            opaque(self.base1.map(|c| clamp_low(i32::from(c) - d))),
            opaque(self.base2.map(|c| clamp_high(i32::from(c) + d))),
            opaque(self.base2.map(|c| clamp_low(i32::from(c) - d))),
        ]
    }
}

fn decode_paint_colors(
    mut paint_colors: [Rgba8; 4],
    indexes: PixelIndexes,
    opaque: bool,
) -> PixelBlock {
    if !opaque {
        paint_colors[2] = TRANSPARENT;
    }
    PixelBlock::from_fn(|x, y| paint_colors[indexes.get(x, y)])
}

impl PlanarFields {
    fn decode(&self) -> PixelBlock {
        let o = self.origin.map(i32::from);
        let h = self.horizontal.map(i32::from);
        let v = self.vertical.map(i32::from);

        PixelBlock::from_fn(|x, y| {
            let (x, y) = (x as i32, y as i32);
            let [r, g, b] =
                [0, 1, 2].map(|c| clamp(((x * (h[c] - o[c]) + y * (v[c] - o[c]) + 2) >> 2) + o[c]));
            [r, g, b, 255]
        })
    }
}
