//! An internal module for casting between types.
//!
//! This serves as a wrapper around `bytemuck` to provide panic safety. All
//! functions in this module are guaranteed to be safe and **NEVER** panic.

pub(crate) trait NonZeroSized {}
impl NonZeroSized for u8 {}
impl<const N: usize, T: NonZeroSized> NonZeroSized for [T; N] {}

pub(crate) trait Castable: bytemuck::Pod + NonZeroSized {}
impl<T: bytemuck::Pod + NonZeroSized> Castable for T {}

/// Casts a slice of `T` to a slice of `u8`.
pub(crate) fn as_bytes<T: Castable>(buffer: &[T]) -> &[u8] {
    bytemuck::cast_slice(buffer)
}

/// Tries to reinterpret a byte slice as a slice of `T`.
///
/// Returns `None` if the length of `bytes` isn't a multiple of
/// `size_of::<T>()` or if `bytes` isn't sufficiently aligned.
pub(crate) fn from_bytes<T: Castable>(bytes: &[u8]) -> Option<&[T]> {
    bytemuck::try_cast_slice(bytes).ok()
}

/// Splits a 16-byte block into its two 8-byte halves.
pub(crate) fn split_halves(block: &[u8; 16]) -> &[[u8; 8]; 2] {
    bytemuck::cast_ref(block)
}

/// Reinterprets a byte slice as a slice of `N`-byte blocks.
///
/// Trailing bytes that don't form a whole block are ignored.
pub(crate) fn as_blocks<const N: usize>(bytes: &[u8]) -> &[[u8; N]]
where
    [u8; N]: Castable,
{
    if N == 0 {
        return &[];
    }
    let whole = bytes.len() - bytes.len() % N;
    from_bytes(&bytes[..whole]).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blocks_ignore_trailing_bytes() {
        let bytes: Vec<u8> = (0..20).collect();
        let blocks: &[[u8; 8]] = as_blocks(&bytes);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1][0], 8);
        assert!(as_blocks::<16>(&bytes[..15]).is_empty());
    }

    #[test]
    fn halves() {
        let block: [u8; 16] = std::array::from_fn(|i| i as u8);
        let [alpha, color] = split_halves(&block);
        assert_eq!(alpha[7], 7);
        assert_eq!(color[0], 8);
    }
}
