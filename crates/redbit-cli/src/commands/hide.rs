use std::path::PathBuf;

use clap::Args;
use redbit_core::{CapacityPolicy, CodecOptions};

use crate::CliResult;

/// Hides a text message in the red channel of an image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image, PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, without `$` and Latin-1 only
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Cut the message off when the image is too small, instead of failing
    #[arg(long)]
    pub truncate: bool,

    /// Print the final image as `data:image/png;base64,...` URI
    #[arg(long)]
    pub data_uri: bool,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let policy = if self.truncate {
            CapacityPolicy::Truncate
        } else {
            CapacityPolicy::Reject
        };

        let media = redbit_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.message,
            CodecOptions::default().with_capacity_policy(policy),
        )?;

        if self.data_uri {
            println!("{}", media.to_png_data_uri()?);
        }

        Ok(())
    }
}
