use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat};
use log::{debug, error};

use crate::error::SteganoError;
use crate::media::image::lsb_codec;
use crate::media::{CodecOptions, PixelGrid};
use crate::result::Result;

use super::Persist;

/// file extensions accepted as carrier input
const SUPPORTED_INPUT_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// a carrier image for steganography, backed by a [`PixelGrid`]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Media {
    grid: PixelGrid,
}

impl Media {
    pub fn from_grid(grid: PixelGrid) -> Self {
        Self { grid }
    }

    pub fn from_image(img: DynamicImage) -> Self {
        Self { grid: img.into() }
    }

    /// Loads a PNG or JPEG file. A JPEG works as carrier for hiding, but the
    /// result has to be saved as PNG.
    pub fn from_file(f: &Path) -> Result<Self> {
        let ext = lowercase_extension(f).ok_or(SteganoError::UnsupportedMedia)?;
        if !SUPPORTED_INPUT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(SteganoError::UnsupportedMedia);
        }

        let img = image::open(f).map_err(|e| {
            error!("Error opening image {f:?}: {e}");
            SteganoError::InvalidImageMedia
        })?;
        debug!("Opened image {f:?} with color type {:?}", img.color());

        Ok(Self::from_image(img))
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    pub fn hide_message(&mut self, message: &str, opts: &CodecOptions) -> Result<&mut Self> {
        lsb_codec::hide_message(&mut self.grid, message, opts)?;

        Ok(self)
    }

    pub fn unveil_message(&self) -> Result<String> {
        lsb_codec::decode(&self.grid)
    }

    /// number of characters this media can carry
    pub fn capacity(&self) -> usize {
        lsb_codec::capacity(&self.grid)
    }

    /// Writes the media as PNG.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        let img = DynamicImage::try_from(self.grid.clone())?;
        img.write_to(&mut writer, ImageFormat::Png).map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
    }

    /// Renders the media as `data:image/png;base64,...` URI, ready to be
    /// embedded as download link.
    pub fn to_png_data_uri(&self) -> Result<String> {
        let mut buf = Cursor::new(Vec::new());
        self.save_to_writer(&mut buf)?;

        Ok(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(buf.into_inner())
        ))
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        match lowercase_extension(file) {
            Some(ext) if ext == "png" => {}
            other => {
                error!("Refusing to save {file:?}, only PNG keeps the hidden message");
                return Err(SteganoError::UnsupportedOutputFormat(
                    other.unwrap_or_default(),
                ));
            }
        }

        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

fn lowercase_extension(f: &Path) -> Option<String> {
    f.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}
