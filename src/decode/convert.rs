//! Internal module for widening the quantized channel values stored in ETC
//! blocks and for saturating intermediate results.
//!
//! ETC widens N-bit values by bit replication: the N bits are shifted to the
//! top of the byte and the low bits are filled with the top bits of the
//! value again. This maps 0 to 0 and the N-bit maximum to 255.

/// Functions for converting **FROM 4-bit** values.
pub(crate) mod n4 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 15);
        (x << 4) | x
    }
}

/// Functions for converting **FROM 5-bit** values.
pub(crate) mod n5 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 31);
        (x << 3) | (x >> 2)
    }
}

/// Functions for converting **FROM 6-bit** values.
pub(crate) mod n6 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 63);
        (x << 2) | (x >> 4)
    }
}

/// Functions for converting **FROM 7-bit** values.
pub(crate) mod n7 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 127);
        (x << 1) | (x >> 6)
    }
}

/// Sign-extends the low 3 bits of `x` (two's complement) to an `i32`.
#[inline(always)]
pub(crate) fn s3(x: u8) -> i32 {
    (i32::from(x & 0x7) << 29) >> 29
}

/// Saturates `n` to `0..=255`.
#[inline(always)]
pub(crate) fn clamp(n: i32) -> u8 {
    n.clamp(0, 255) as u8
}

/// Saturates `n` at 0. `n` must not exceed 255.
#[inline(always)]
pub(crate) fn clamp_low(n: i32) -> u8 {
    debug_assert!(n <= 255);
    n.max(0) as u8
}

/// Saturates `n` at 255. `n` must not be negative.
#[inline(always)]
pub(crate) fn clamp_high(n: i32) -> u8 {
    debug_assert!(n >= 0);
    n.min(255) as u8
}
