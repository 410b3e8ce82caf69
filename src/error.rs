#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TranscodeError {
    /// The source buffer doesn't contain all blocks of the image.
    ///
    /// A source buffer must contain at least
    /// `blocks_x * blocks_y * format.bytes_per_block()` bytes. Trailing bytes
    /// are ignored.
    SourceTooSmall { required: usize, actual: usize },
    /// The destination buffer can't hold all decoded blocks.
    ///
    /// Since ETC images are decoded in whole 4x4 blocks, the destination must
    /// include padding rows for images whose height isn't a multiple of 4.
    /// See [`RasterLayout::dest_len`](crate::RasterLayout::dest_len).
    DestinationTooSmall { required: usize, actual: usize },
    /// The size of the image is too large to be addressed.
    ///
    /// I.e. the number of bytes in the source or destination buffer would
    /// exceed `usize::MAX`.
    DataLayoutTooBig,
}

impl std::fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscodeError::SourceTooSmall { required, actual } => {
                write!(
                    f,
                    "Source buffer too small: required at least {} bytes, got {}",
                    required, actual
                )
            }
            TranscodeError::DestinationTooSmall { required, actual } => {
                write!(
                    f,
                    "Destination buffer too small: required at least {} bytes, got {}",
                    required, actual
                )
            }
            TranscodeError::DataLayoutTooBig => {
                write!(f, "Data layout of the image is too large")
            }
        }
    }
}

impl std::error::Error for TranscodeError {}
