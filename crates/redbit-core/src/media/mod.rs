pub mod codec_options;
mod grid;
pub mod image;
mod primitives;
mod types;

use std::path::Path;

pub use codec_options::{CapacityPolicy, CodecOptions};
pub use grid::{ChannelLayout, PixelGrid};
pub use primitives::*;
pub use types::*;

pub trait Persist {
    /// Persists as PNG, any other target format would destroy the hidden bits.
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
