use std::slice::{ChunksExact, ChunksExactMut};

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::error::SteganoError;
use crate::result::Result;

/// channel arrangement of the pixels in a [`PixelGrid`]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ChannelLayout {
    Rgb,
    Rgba,
}

impl ChannelLayout {
    /// number of `u8` samples per pixel
    pub fn channels(&self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }
}

/// An owned grid of 8 bit pixels in raster order (left to right, top to bottom).
///
/// The samples are stored flat, pixel after pixel, so the grid holds exactly
/// `width * height * layout.channels()` bytes.
///
/// ## Example of usage
/// ```rust
/// use redbit_core::media::{ChannelLayout, PixelGrid};
///
/// let grid = PixelGrid::from_pixels(2, 1, [[1, 2, 3], [4, 5, 6]])
///     .expect("Cannot create pixel grid");
///
/// assert_eq!(grid.layout(), ChannelLayout::Rgb);
/// assert_eq!(grid.pixel(1), Some(&[4, 5, 6][..]));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    samples: Vec<u8>,
}

impl PixelGrid {
    /// constructor for a flat sample buffer, fails if the buffer does not match the dimensions
    pub fn new(width: u32, height: u32, layout: ChannelLayout, samples: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * layout.channels();
        if samples.len() != expected {
            return Err(SteganoError::InvalidGrid {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }

    /// constructor for a sequence of RGB (`N = 3`) or RGBA (`N = 4`) pixels
    pub fn from_pixels<const N: usize, I>(width: u32, height: u32, pixels: I) -> Result<Self>
    where
        I: IntoIterator<Item = [u8; N]>,
    {
        let layout = match N {
            3 => ChannelLayout::Rgb,
            4 => ChannelLayout::Rgba,
            _ => {
                return Err(SteganoError::InvalidGrid {
                    expected: 4,
                    actual: N,
                })
            }
        };
        let samples = pixels.into_iter().flatten().collect();

        Self::new(width, height, layout, samples)
    }

    /// a grid where every pixel has the same color
    pub fn filled(width: u32, height: u32, layout: ChannelLayout, pixel: &[u8]) -> Result<Self> {
        if pixel.len() != layout.channels() {
            return Err(SteganoError::InvalidGrid {
                expected: layout.channels(),
                actual: pixel.len(),
            });
        }
        let samples = pixel.repeat(width as usize * height as usize);

        Self::new(width, height, layout, samples)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// the pixel at the given raster index
    pub fn pixel(&self, index: usize) -> Option<&[u8]> {
        let channels = self.layout.channels();
        self.samples.get(index * channels..(index + 1) * channels)
    }

    /// all pixels in raster order, each as a slice of its channels
    pub fn pixels(&self) -> ChunksExact<'_, u8> {
        self.samples.chunks_exact(self.layout.channels())
    }

    pub fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.samples.chunks_exact_mut(self.layout.channels())
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.samples
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.samples
    }
}

impl From<RgbImage> for PixelGrid {
    fn from(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: ChannelLayout::Rgb,
            samples: img.into_raw(),
        }
    }
}

impl From<RgbaImage> for PixelGrid {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: ChannelLayout::Rgba,
            samples: img.into_raw(),
        }
    }
}

/// Images with an alpha channel keep it, everything else becomes 8 bit RGB.
impl From<DynamicImage> for PixelGrid {
    fn from(img: DynamicImage) -> Self {
        if img.color().has_alpha() {
            img.into_rgba8().into()
        } else {
            img.into_rgb8().into()
        }
    }
}

impl TryFrom<PixelGrid> for DynamicImage {
    type Error = SteganoError;

    fn try_from(grid: PixelGrid) -> Result<Self> {
        let actual = grid.samples.len();
        let PixelGrid {
            width,
            height,
            layout,
            samples,
        } = grid;
        let img = match layout {
            ChannelLayout::Rgb => {
                RgbImage::from_raw(width, height, samples).map(DynamicImage::ImageRgb8)
            }
            ChannelLayout::Rgba => {
                RgbaImage::from_raw(width, height, samples).map(DynamicImage::ImageRgba8)
            }
        };

        img.ok_or(SteganoError::InvalidGrid {
            expected: width as usize * height as usize * layout.channels(),
            actual,
        })
    }
}
