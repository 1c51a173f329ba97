use std::io::{ErrorKind, Read, Write};

use super::decoder::ImageRedChannel;
use super::encoder::ImageRedChannelMut;
use crate::error::SteganoError;
use crate::media::{CapacityPolicy, CodecOptions, PixelGrid};
use crate::message::Message;
use crate::result::Result;
use crate::universal_decoder::{Decoder, OneBitUnveil};
use crate::universal_encoder::{Encoder, OneBitHide};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder<'i>(input: &'i PixelGrid) -> Box<dyn Read + 'i> {
        Box::new(Decoder::new(ImageRedChannel::new(input), OneBitUnveil))
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder<'i>(carrier: &'i mut PixelGrid) -> Box<dyn Write + 'i> {
        Box::new(Encoder::new(ImageRedChannelMut::new(carrier), OneBitHide))
    }
}

/// Hides `message` in a copy of `grid`, the given grid stays untouched.
///
/// Messages that do not fit are rejected with [`SteganoError::CapacityExceeded`].
pub fn encode(grid: &PixelGrid, message: &str) -> Result<PixelGrid> {
    encode_with_options(grid, message, &CodecOptions::default())
}

/// Like [`encode`] with explicit [`CodecOptions`].
pub fn encode_with_options(
    grid: &PixelGrid,
    message: &str,
    options: &CodecOptions,
) -> Result<PixelGrid> {
    let mut carrier = grid.clone();
    hide_message(&mut carrier, message, options)?;

    Ok(carrier)
}

/// Hides `message` in place, mutating the red channel of the first
/// `8 * (len + 1)` pixels of `carrier`.
///
/// On error the carrier is left untouched.
pub fn hide_message(carrier: &mut PixelGrid, message: &str, options: &CodecOptions) -> Result<()> {
    let message = Message::new(message)?;
    if !fits(carrier, &message) && options.capacity_policy == CapacityPolicy::Reject {
        let (width, height) = carrier.dimensions();
        return Err(SteganoError::CapacityExceeded {
            width,
            height,
            required: message.bit_len(),
            available: carrier.pixel_count(),
        });
    }

    let data = message.to_raw_data();
    let mut encoder = LsbCodec::encoder(carrier);
    match encoder.write_all(&data) {
        // only reachable with `CapacityPolicy::Truncate`, the carrier is full
        Err(e) if e.kind() == ErrorKind::WriteZero => Ok(()),
        result => result.map_err(SteganoError::from),
    }
}

/// Unveils the message hidden in `grid`.
///
/// Fails with [`SteganoError::MalformedPayload`] if the pixels run out before the terminator.
pub fn decode(grid: &PixelGrid) -> Result<String> {
    let mut decoder = LsbCodec::decoder(grid);

    Ok(Message::from_raw_data(&mut decoder)?.into_text())
}

/// Whether `grid` has one pixel for every bit of `message`, terminator included.
pub fn fits(grid: &PixelGrid, message: &Message) -> bool {
    message.bit_len() <= grid.pixel_count()
}

/// Number of characters `grid` can carry, the terminator is already accounted for.
pub fn capacity(grid: &PixelGrid) -> usize {
    (grid.pixel_count() >> 3).saturating_sub(1)
}
