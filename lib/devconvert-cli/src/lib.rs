pub mod cmd;
pub mod errors;
pub mod settings;

pub use crate::errors::{CliResult, DevconvertCliError};
