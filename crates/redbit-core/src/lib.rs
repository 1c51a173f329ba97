//! # redbit Core API
//!
//! Hides a text message in the least significant bit of the red channel of
//! every pixel, in raster order, and unveils it again. The message ends with
//! a `$` terminator, so it must not contain that character itself, and every
//! character needs to fit into a single byte (Latin-1).
//!
//! The codec works on a [`PixelGrid`] in memory, [`media::Media`] adds image
//! file I/O on top. Only PNG is written, since any lossy format destroys the
//! hidden bits.
//!
//! # Usage Examples
//!
//! ## Hide and unveil a message in memory
//!
//! ```rust
//! use redbit_core::media::{ChannelLayout, PixelGrid};
//!
//! let carrier = PixelGrid::filled(8, 4, ChannelLayout::Rgb, &[255, 255, 255])
//!     .expect("Failed to create carrier");
//!
//! let secret = redbit_core::encode(&carrier, "Hi").expect("Failed to hide message");
//! assert_eq!(redbit_core::decode(&secret).expect("Failed to unveil message"), "Hi");
//! ```
//!
//! ## Hide data inside an image file
//!
//! ```rust
//! use redbit_core::media::{ChannelLayout, Media, Persist, PixelGrid};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! Media::from_grid(PixelGrid::filled(64, 64, ChannelLayout::Rgb, &[30, 60, 90]).unwrap())
//!     .save_as(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! redbit_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = redbit_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod message;
pub use message::*;

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::error::SteganoError;
pub use crate::media::image::lsb_codec::{
    capacity, decode, encode, encode_with_options, fits, hide_message,
};
pub use crate::media::{CapacityPolicy, CodecOptions, PixelGrid};
pub use crate::result::Result;
