use std::path::PathBuf;

use clap::Parser;
use devconvert_cli::cmd::convert::{self, ConvertArgs};

use crate::output::{print_output, Output};

/// Convert an S2I component into a devfile.
#[derive(Parser, Debug)]
pub(crate) struct ConvertCommand {
    #[arg(long, short, help = "Directory holding the component's .odo/config.yaml")]
    pub context: Option<PathBuf>,

    #[arg(long, help = "YAML catalog of image streams used to resolve the builder image")]
    pub image_catalog: Option<PathBuf>,

    #[arg(long, help = "Add the builder image's S2I paths to the container environment")]
    pub inject_builder_env: bool,

    #[arg(long, help = "Print the devfile instead of writing it")]
    pub dry_run: bool,

    #[arg(
        long,
        short,
        default_value_t,
        help = "How the command output should be rendered"
    )]
    pub output: Output,
}

impl crate::commands::Execute for ConvertCommand {
    fn execute(&self) -> anyhow::Result<Option<String>> {
        let summary = convert::invoke(ConvertArgs {
            context: self.context.clone(),
            image_catalog: self.image_catalog.clone(),
            inject_builder_env: self.inject_builder_env,
            dry_run: self.dry_run,
        })?;

        print_output(self.output, summary)?;
        Ok(None)
    }
}
