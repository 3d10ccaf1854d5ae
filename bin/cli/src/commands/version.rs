use clap::Parser;

use crate::built_info;

/// Show the devconvert version.
#[derive(Parser, Debug)]
pub(crate) struct VersionCommand;

impl crate::commands::Execute for VersionCommand {
    fn execute(&self) -> anyhow::Result<Option<String>> {
        Ok(Some(format!("devconvert version: {}", built_info::PKG_VERSION)))
    }
}
