use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::info;

use crate::{media::Media, SteganoError};

/// name of the file the message is written to, when an output folder is given
pub const SECRET_MESSAGE_FILE: &str = "secret-message.txt";

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the message will be saved to, as `secret-message.txt`
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Same as [`Self::into_output_folder`], `None` keeps the message in memory only
    pub fn use_output_folder<P: AsRef<Path>>(mut self, output_folder: Option<P>) -> Self {
        self.output_folder = output_folder.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<String, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let message = Media::from_file(&secret_media)?.unveil_message()?;
        info!(
            "Unveiled {} characters from {secret_media:?}",
            message.chars().count()
        );

        if let Some(output_folder) = self.output_folder {
            let target_file = output_folder.join(SECRET_MESSAGE_FILE);
            let mut target_file =
                File::create(target_file).map_err(|source| SteganoError::WriteError { source })?;

            // one byte per character, like it was hidden
            let raw: Vec<u8> = message
                .chars()
                .filter_map(|c| u8::try_from(c).ok())
                .collect();
            target_file
                .write_all(&raw)
                .map_err(|source| SteganoError::WriteError { source })?;
        }

        Ok(message)
    }
}
