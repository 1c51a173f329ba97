use crate::media::image::iterators::FirstChannelIterMut;
use crate::media::{MediaPrimitiveMut, PixelGrid};

/// stegano target for pixel grids, hands out the red channel of every pixel for mutation
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use redbit_core::media::{ChannelLayout, PixelGrid};
/// use redbit_core::media::image::encoder::ImageRedChannelMut;
/// use redbit_core::universal_encoder::{Encoder, OneBitHide};
///
/// let original = PixelGrid::filled(4, 2, ChannelLayout::Rgb, &[255, 255, 255])
///     .expect("Cannot create pixel grid");
/// let mut grid = original.clone();
/// {
///     let mut encoder = Encoder::new(ImageRedChannelMut::new(&mut grid), OneBitHide);
///     encoder.write_all(b"H").expect("Cannot write secret message");
/// }
/// assert_ne!(original.pixel(0), grid.pixel(0));
/// assert_eq!(grid.pixel(1), Some(&[255, 255, 255][..]));
/// ```
pub struct ImageRedChannelMut<'a> {
    colors: FirstChannelIterMut<'a>,
}

impl<'a> ImageRedChannelMut<'a> {
    /// constructor for a given `PixelGrid` that lives somewhere
    pub fn new(input: &'a mut PixelGrid) -> Self {
        Self {
            colors: FirstChannelIterMut::from_grid(input),
        }
    }
}

impl<'i> Iterator for ImageRedChannelMut<'i> {
    type Item = MediaPrimitiveMut<'i>;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().map(MediaPrimitiveMut::ImageColorChannel)
    }
}
