use clap::{Parser, Subcommand};

use crate::commands::convert::ConvertCommand;
use crate::commands::version::VersionCommand;

#[derive(Debug, Parser)]
#[command(name = "devconvert")]
pub struct Opt {
    #[arg(
        long,
        help = "Prints a verbose output during the program execution",
        global = true
    )]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[remain::sorted]
#[derive(Debug, Subcommand)]
pub enum Command {
    Convert(ConvertCommand),
    Version(VersionCommand),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::cmds::{Command, Opt};
    use crate::output::Output;

    #[test]
    fn should_parse_convert_arguments() {
        let opt = Opt::try_parse_from([
            "devconvert",
            "--debug",
            "convert",
            "--context",
            "app",
            "--image-catalog",
            "catalog.yaml",
            "--inject-builder-env",
            "--dry-run",
            "--output",
            "json",
        ])
        .unwrap();

        assert!(opt.debug);
        let Command::Convert(cmd) = opt.cmd else {
            panic!("expected convert command");
        };
        assert_eq!(Some(PathBuf::from("app")), cmd.context);
        assert_eq!(Some(PathBuf::from("catalog.yaml")), cmd.image_catalog);
        assert!(cmd.inject_builder_env);
        assert!(cmd.dry_run);
        assert!(matches!(cmd.output, Output::Json));
    }

    #[test]
    fn convert_defaults_to_text_output() {
        let opt = Opt::try_parse_from(["devconvert", "convert"]).unwrap();

        let Command::Convert(cmd) = opt.cmd else {
            panic!("expected convert command");
        };
        assert!(matches!(cmd.output, Output::Text));
        assert!(!cmd.dry_run);
        assert!(!opt.debug);
    }

    #[test]
    fn should_reject_unknown_output() {
        let err = Opt::try_parse_from(["devconvert", "convert", "--output", "table"]).unwrap_err();

        assert_eq!(clap::error::ErrorKind::ValueValidation, err.kind());
    }
}
