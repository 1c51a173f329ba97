use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message from an image and prints it
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Also store the message as `secret-message.txt` in that folder
    #[arg(short = 'o', long = "out", value_name = "output folder")]
    pub output_folder: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let message = redbit_core::commands::unveil(&self.media, self.output_folder.as_deref())?;
        println!("{message}");

        Ok(())
    }
}
