use clap::Parser;
use log::error;

use redbit_core::SteganoError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, SteganoError>;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::Capacity(args) => args.run(),
    };

    if let Err(e) = result {
        error!("{e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
