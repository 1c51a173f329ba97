use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn should_parse_hide_arguments() {
        let args = CliArgs::try_parse_from([
            "redbit", "hide", "-i", "carrier.jpg", "-o", "secret.png", "-m", "Hi", "--truncate",
        ])
        .unwrap();

        let Commands::Hide(hide) = args.command else {
            panic!("expected the hide command");
        };
        assert_eq!(hide.media, Path::new("carrier.jpg"));
        assert_eq!(hide.write_to_file, Path::new("secret.png"));
        assert_eq!(hide.message, "Hi");
        assert!(hide.truncate);
        assert!(!hide.data_uri);
    }

    #[test]
    fn should_insist_on_a_message_when_hiding() {
        let result = CliArgs::try_parse_from(["redbit", "hide", "-i", "a.png", "-o", "b.png"]);

        assert!(result.is_err());
    }

    #[test]
    fn should_parse_unveil_with_and_without_output_folder() {
        let args = CliArgs::try_parse_from(["redbit", "unveil", "--in", "secret.png"]).unwrap();
        let Commands::Unveil(unveil) = args.command else {
            panic!("expected the unveil command");
        };
        assert_eq!(unveil.media, Path::new("secret.png"));
        assert!(unveil.output_folder.is_none());

        let args =
            CliArgs::try_parse_from(["redbit", "unveil", "-i", "secret.png", "-o", "out"]).unwrap();
        let Commands::Unveil(unveil) = args.command else {
            panic!("expected the unveil command");
        };
        assert_eq!(unveil.output_folder.as_deref(), Some(Path::new("out")));
    }

    #[test]
    fn should_parse_capacity() {
        let args = CliArgs::try_parse_from(["redbit", "capacity", "-i", "carrier.png"]).unwrap();

        assert!(matches!(args.command, Commands::Capacity(_)));
    }
}
