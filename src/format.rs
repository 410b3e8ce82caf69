use crate::GlInternalFormat;

/// The number and order of channels in a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// 3 bytes per pixel, `[r, g, b]`.
    Rgb = 0,
    /// 4 bytes per pixel, `[r, g, b, a]`.
    Rgba = 1,
}
impl Channels {
    /// Returns the number of channels.
    pub const fn count(&self) -> u8 {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
    /// Returns the number of bytes per decoded pixel.
    ///
    /// All decoded channels are 8 bits, so this is the same as
    /// [`Self::count`].
    pub const fn bytes_per_pixel(&self) -> u8 {
        self.count()
    }
}

/// The ETC block-compression formats supported by this crate.
///
/// All formats encode 4x4 pixel blocks. sRGB formats are decoded like their
/// linear counterparts, no color-space conversion is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[allow(non_camel_case_types)]
pub enum Format {
    /// ETC1 RGB. 8 bytes per block.
    ///
    /// ETC1 is a subset of ETC2 RGB, so both are decoded with the same
    /// decoder.
    ETC1_RGB8,
    /// ETC2 RGB. 8 bytes per block.
    ETC2_RGB8,
    /// ETC2 RGB with 1-bit punch-through alpha. 8 bytes per block.
    ETC2_RGB8_PUNCHTHROUGH_ALPHA1,
    /// ETC2 RGB with an EAC alpha block. 16 bytes per block.
    ///
    /// Each block starts with the 8-byte EAC alpha block, followed by the
    /// 8-byte ETC2 color block.
    ETC2_RGBA8_EAC,
}
impl Format {
    /// All supported formats.
    pub const ALL: &'static [Format] = &[
        Format::ETC1_RGB8,
        Format::ETC2_RGB8,
        Format::ETC2_RGB8_PUNCHTHROUGH_ALPHA1,
        Format::ETC2_RGBA8_EAC,
    ];

    /// The number of bytes of one encoded 4x4 block.
    pub const fn bytes_per_block(&self) -> u8 {
        match self {
            Self::ETC1_RGB8 | Self::ETC2_RGB8 | Self::ETC2_RGB8_PUNCHTHROUGH_ALPHA1 => 8,
            Self::ETC2_RGBA8_EAC => 16,
        }
    }
    /// Whether each color block is preceded by an EAC alpha block.
    pub const fn has_alpha_block(&self) -> bool {
        matches!(self, Self::ETC2_RGBA8_EAC)
    }
    /// The channels of the image data.
    ///
    /// This is [`Channels::Rgba`] for all formats that may contain
    /// non-opaque pixels.
    pub const fn channels(&self) -> Channels {
        match self {
            Self::ETC1_RGB8 | Self::ETC2_RGB8 => Channels::Rgb,
            Self::ETC2_RGB8_PUNCHTHROUGH_ALPHA1 | Self::ETC2_RGBA8_EAC => Channels::Rgba,
        }
    }

    /// Returns the format of a KTX/OpenGL internal format.
    pub const fn from_gl(format: GlInternalFormat) -> Self {
        match format {
            GlInternalFormat::ETC1_RGB8_OES => Self::ETC1_RGB8,
            GlInternalFormat::COMPRESSED_RGB8_ETC2 | GlInternalFormat::COMPRESSED_SRGB8_ETC2 => {
                Self::ETC2_RGB8
            }
            GlInternalFormat::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2
            | GlInternalFormat::COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2 => {
                Self::ETC2_RGB8_PUNCHTHROUGH_ALPHA1
            }
            GlInternalFormat::COMPRESSED_RGBA8_ETC2_EAC
            | GlInternalFormat::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC => Self::ETC2_RGBA8_EAC,
        }
    }
}

impl From<GlInternalFormat> for Format {
    fn from(format: GlInternalFormat) -> Self {
        Self::from_gl(format)
    }
}
