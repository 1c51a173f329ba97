use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::media::image::lsb_codec;
use crate::media::{CapacityPolicy, Media, Persist};
use crate::{CodecOptions, Message, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// The carrier image, PNG or JPEG
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The target file, needs to be a PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Hides the message, saves the result and hands the media back,
    /// for example to render it as data URI.
    pub fn execute(self) -> Result<Media, SteganoError> {
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let mut media = Media::from_file(&image)?;
        let validated = Message::new(message.as_str())?;
        let length = validated.len();
        if !lsb_codec::fits(media.grid(), &validated)
            && self.options.capacity_policy == CapacityPolicy::Truncate
        {
            warn!(
                "{image:?} carries only {} of {length} characters, the message gets truncated",
                media.capacity()
            );
        }

        media.hide_message(&message, &self.options)?.save_as(&output)?;
        info!("Hid {length} characters in {output:?}");

        Ok(media)
    }
}
