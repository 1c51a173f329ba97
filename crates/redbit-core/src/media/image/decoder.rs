use crate::media::image::iterators::FirstChannelIter;
use crate::media::{MediaPrimitive, PixelGrid};

/// stegano source for pixel grids, yields the red channel of every pixel
///
/// ## Example of usage
/// ```rust
/// use std::io::Read;
/// use redbit_core::media::PixelGrid;
/// use redbit_core::media::image::decoder::ImageRedChannel;
/// use redbit_core::universal_decoder::{Decoder, OneBitUnveil};
///
/// // the red channels carry the bits 0100_1000, which is an `H`
/// let grid = PixelGrid::from_pixels(
///     8,
///     1,
///     [0, 1, 0, 0, 1, 0, 0, 0].map(|bit| [254 + bit, 7, 7]),
/// )
/// .expect("Cannot create pixel grid");
/// let mut secret = vec![0; 1];
///
/// Decoder::new(ImageRedChannel::new(&grid), OneBitUnveil)
///     .read_exact(&mut secret)
///     .expect("Cannot read 1 byte from decoder");
///
/// assert_eq!(secret, b"H");
/// ```
pub struct ImageRedChannel<'i> {
    colors: FirstChannelIter<'i>,
}

impl<'i> ImageRedChannel<'i> {
    /// constructor for a given `PixelGrid` that lives somewhere
    pub fn new(input: &'i PixelGrid) -> Self {
        Self {
            colors: FirstChannelIter::from_grid(input),
        }
    }
}

/// iterates over the grid and returns the red channel of each pixel wrapped into a `MediaPrimitive`
impl<'i> Iterator for ImageRedChannel<'i> {
    type Item = MediaPrimitive;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.colors
            .next()
            .map(|c| MediaPrimitive::ImageColorChannel(*c))
    }
}

#[cfg(test)]
mod decoder_tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn it_should_iterate_over_the_red_channel_of_all_pixels() {
        let img = prepare_5x5_image();
        let mut media_primitive_iter = ImageRedChannel::new(&img);

        for (i, pixel) in img.pixels().enumerate() {
            let given_color = media_primitive_iter
                .next()
                .unwrap_or_else(|| panic!("MediaPrimitive #{i} was not even existing!"));

            assert_eq!(
                given_color,
                pixel[0].into(),
                "MediaPrimitive #{i} does not match"
            );
        }
        // ensure iterator is exhausted
        assert!(media_primitive_iter.next().is_none());
    }
}
