#![allow(unused)]

use etc2::*;
use rand::{RngCore, SeedableRng};
use sha2::{Digest, Sha256};

pub fn create_rng() -> impl rand::Rng {
    rand_chacha::ChaChaRng::seed_from_u64(123456789)
}

pub fn hash_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let bytes: [u8; 32] = result.into();

    let mut hex = String::new();
    for byte in bytes.iter() {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

pub fn random_bytes(rng: &mut impl RngCore, len: usize) -> Vec<u8> {
    let mut out = vec![0; len];
    rng.fill_bytes(&mut out);
    out
}

/// Creates random compressed data for an image of the given size.
pub fn random_image(rng: &mut impl RngCore, size: Size, format: Format) -> Vec<u8> {
    let layout = RasterLayout::new(size, format, Channels::Rgba).unwrap();
    random_bytes(rng, layout.source_len())
}

/// Decodes an image into a new buffer of exactly [`RasterLayout::dest_len`]
/// bytes.
pub fn decode_to_vec(
    source: &[u8],
    size: Size,
    format: Format,
    channels: Channels,
    parallel: bool,
) -> Vec<u8> {
    let layout = RasterLayout::new(size, format, channels).unwrap();
    let mut dest = vec![0; layout.dest_len()];
    let mut options = Options::default();
    options.parallel = parallel;
    transcode(source, &mut dest, size, format, channels, &options).unwrap();
    dest
}

/// Builds an individual mode block from two 4-bit colors. All pixel indexes
/// are 0.
pub fn individual_block(c1: [u8; 3], c2: [u8; 3], tables: [u8; 2], flip: bool) -> [u8; 8] {
    let mut block = [0; 8];
    for i in 0..3 {
        block[i] = (c1[i] << 4) | (c2[i] & 0xF);
    }
    block[3] = (tables[0] << 5) | (tables[1] << 2) | flip as u8;
    block
}

/// Sets the pixel indexes of a color block. `indexes` is in row-major order.
pub fn with_indexes(mut block: [u8; 8], indexes: [u8; 16]) -> [u8; 8] {
    let mut msb = 0_u16;
    let mut lsb = 0_u16;
    for y in 0..4 {
        for x in 0..4 {
            let index = indexes[y * 4 + x];
            let bit = x * 4 + y;
            msb |= u16::from(index >> 1 & 1) << bit;
            lsb |= u16::from(index & 1) << bit;
        }
    }
    block[4..6].copy_from_slice(&msb.to_be_bytes());
    block[6..8].copy_from_slice(&lsb.to_be_bytes());
    block
}

/// A planar block with origin (0, 0, 0), horizontal anchor (255, 0, 0), and
/// vertical anchor (0, 255, 0).
pub const PLANAR_RED_GREEN: [u8; 8] = [0x00, 0x00, 0x04, 0x7F, 0x00, 0x00, 0x1F, 0xC0];

pub fn random_block(rng: &mut impl RngCore) -> [u8; 8] {
    let mut block = [0; 8];
    rng.fill_bytes(&mut block);
    block
}
