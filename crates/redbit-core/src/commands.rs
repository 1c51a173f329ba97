use std::path::Path;

use crate::media::Media;
use crate::{CodecOptions, SteganoError};

/// hides `message` in `media` and saves the result as PNG to `write_to_file`
pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: &str,
    options: CodecOptions,
) -> Result<Media, SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .with_message(message)
        .execute()
}

/// unveils the message of `secret_media`, optionally writing it into `output_folder`
pub fn unveil(secret_media: &Path, output_folder: Option<&Path>) -> Result<String, SteganoError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .use_output_folder(output_folder)
        .execute()
}

/// number of characters `media` can carry
pub fn capacity(media: &Path) -> Result<usize, SteganoError> {
    Ok(Media::from_file(media)?.capacity())
}
