use std::slice::{ChunksExact, ChunksExactMut};

use crate::media::PixelGrid;

/// Readonly access to the first color channel of every pixel, in raster order
pub(crate) struct FirstChannelIter<'a> {
    pixels: ChunksExact<'a, u8>,
}

impl<'a> FirstChannelIter<'a> {
    pub fn from_grid(grid: &'a PixelGrid) -> Self {
        Self {
            pixels: grid.pixels(),
        }
    }
}

impl<'a> Iterator for FirstChannelIter<'a> {
    type Item = &'a u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.pixels.next().and_then(|pixel| pixel.first())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}

/// Mutable access to the first color channel of every pixel, in raster order.
/// All other channels stay out of reach.
pub(crate) struct FirstChannelIterMut<'a> {
    pixels: ChunksExactMut<'a, u8>,
}

impl<'a> FirstChannelIterMut<'a> {
    pub fn from_grid(grid: &'a mut PixelGrid) -> Self {
        Self {
            pixels: grid.pixels_mut(),
        }
    }
}

impl<'a> Iterator for FirstChannelIterMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.pixels.next().and_then(|pixel| pixel.first_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::media::ChannelLayout;
    use crate::test_utils::{prepare_4x6_linear_growing_colors, prepare_5x5_image};

    #[test]
    fn should_ensure_raster_order_works_for_rgb_images() {
        let mut grid = prepare_4x6_linear_growing_colors();
        let mut color_iter = FirstChannelIter::from_grid(&grid);
        for i in 0..24u8 {
            assert_eq!(
                color_iter.next(),
                Some(&(i * 3)),
                "the ({i}+1)-th color was wrong"
            );
        }
        assert!(color_iter.next().is_none());

        // now the mut iterator
        let color_iter = FirstChannelIterMut::from_grid(&mut grid);
        for (i, c) in color_iter.enumerate() {
            let i: u8 = i as u8;
            assert_eq!(c, &(i * 3), "the ({i}+1)-th color was wrong");
        }
    }

    #[test]
    fn should_ensure_raster_order_works_for_rgba_images() {
        let grid = prepare_5x5_image();
        assert_eq!(grid.layout(), ChannelLayout::Rgba);
        let (width, height) = grid.dimensions();
        let mut color_iter = FirstChannelIter::from_grid(&grid);

        for y in 0..height {
            for x in 0..width {
                let expected_color = (4 * x + 20 * y) as u8;
                let given_color = color_iter
                    .next()
                    .unwrap_or_else(|| panic!("Color at ({x}, {y}) was not even existing!"));

                assert_eq!(
                    given_color, &expected_color,
                    "Color at ({x}, {y}) does not match"
                );
            }
        }
        // ensure iterator is exhausted
        assert!(color_iter.next().is_none());
    }

    #[test]
    fn should_only_mutate_the_first_channel() {
        let mut grid = prepare_5x5_image();
        let original = grid.clone();
        for c in FirstChannelIterMut::from_grid(&mut grid) {
            *c = 0xaa;
        }

        for (given, expected) in grid.pixels().zip(original.pixels()) {
            assert_eq!(given[0], 0xaa);
            assert_eq!(given[1..], expected[1..]);
        }
    }

    #[test]
    fn should_report_one_color_per_pixel() {
        let grid = prepare_5x5_image();

        assert_eq!(FirstChannelIter::from_grid(&grid).size_hint(), (25, Some(25)));
    }
}
