use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Prints how many characters an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image, PNG or JPEG
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        println!("{}", redbit_core::commands::capacity(&self.media)?);

        Ok(())
    }
}
