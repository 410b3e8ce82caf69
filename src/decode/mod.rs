mod convert;
mod eac;
mod etc;
mod tiling;

pub use eac::decode_alpha_block;
pub use etc::{color_block_mode, decode_color_block, decode_punchthrough_block, ColorMode};

pub(crate) use tiling::decode_image;
