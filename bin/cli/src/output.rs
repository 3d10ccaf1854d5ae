use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use strum::{Display, EnumString};

#[remain::sorted]
#[derive(Clone, Copy, Debug, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Output {
    /// Pretty printed JSON, meant for scripts.
    Json,

    /// Human-readable output.
    #[default]
    Text,
}

pub(crate) fn print_output<A: std::fmt::Display + Serialize>(output: Output, value: A) -> Result<()> {
    write_output(&mut std::io::stdout().lock(), output, value)
}

fn write_output<W: Write, A: std::fmt::Display + Serialize>(
    writer: &mut W,
    output: Output,
    value: A,
) -> Result<()> {
    match output {
        Output::Json => {
            serde_json::to_writer_pretty(&mut *writer, &value)?;
            writeln!(writer)?;
        }
        Output::Text => writeln!(writer, "{value}")?,
    }
    Ok(())
}
