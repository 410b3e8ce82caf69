use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The OpenGL `glInternalFormat` codes of the supported ETC formats, as
/// stored in KTX and KTX2 headers.
///
/// https://registry.khronos.org/OpenGL/api/GLES3/gl3.h
///
/// Use [`Format::from`](crate::Format) to get the format to decode with. The
/// sRGB variants map to the same [`Format`](crate::Format) as their linear
/// counterparts.
///
/// ```
/// use etc2::{Format, GlInternalFormat};
///
/// let gl = GlInternalFormat::try_from(0x9278).unwrap();
/// assert_eq!(gl, GlInternalFormat::COMPRESSED_RGBA8_ETC2_EAC);
/// assert_eq!(Format::from(gl), Format::ETC2_RGBA8_EAC);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum GlInternalFormat {
    ETC1_RGB8_OES = 0x8D64,
    COMPRESSED_RGB8_ETC2 = 0x9274,
    COMPRESSED_SRGB8_ETC2 = 0x9275,
    COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2 = 0x9276,
    COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2 = 0x9277,
    COMPRESSED_RGBA8_ETC2_EAC = 0x9278,
    COMPRESSED_SRGB8_ALPHA8_ETC2_EAC = 0x9279,
}

impl GlInternalFormat {
    /// Whether the format stores sRGB-encoded colors.
    ///
    /// This is informational only. Decoders return the stored values as-is.
    pub const fn is_srgb(&self) -> bool {
        matches!(
            self,
            Self::COMPRESSED_SRGB8_ETC2
                | Self::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2
                | Self::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC
        )
    }
}
