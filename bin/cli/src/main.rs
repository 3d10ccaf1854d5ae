use clap::Parser;
use tracing::error;

use crate::cmds::{Command, Opt};
use crate::commands::Execute;

mod cmds;
mod commands;
mod output;

pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

fn main() {
    let opt = Opt::parse();

    let tracing_level = if opt.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // diagnostics on stderr, command output on stdout
    tracing_subscriber::fmt::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .init();

    let result = match opt.cmd {
        Command::Convert(cmd) => cmd.execute(),
        Command::Version(cmd) => cmd.execute(),
    };

    match result {
        Ok(output) => {
            if let Some(output) = output {
                println!("{output}");
            }
        }
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    };
}
