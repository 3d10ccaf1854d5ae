//! Converts a legacy S2I component configuration into a devfile and the matching env settings.
//!
//! The conversion resolves the component's builder image through an [`ImageRegistry`], builds the
//! fixed `s2i-assemble`/`s2i-run` command pair, translates storage, URLs and environment
//! variables into devfile components and assembles the document fully in memory before anything
//! is written. Env settings are derived independently from the same configuration.
//!
//! [`ImageRegistry`]: imagestream::ImageRegistry

mod assemble;
mod builder_env;
mod commands;
mod components;
mod env_settings;
mod errors;
mod generate;
mod image;

#[cfg(test)]
mod test_support;

pub use crate::assemble::assemble;
pub use crate::builder_env::{inject_builder_env, S2IPaths};
pub use crate::commands::{
    build_commands, BUILD_COMMAND_ID, BUILD_COMMAND_LINE, RUN_COMMAND_ID, RUN_COMMAND_LINE,
};
pub use crate::components::build_components;
pub use crate::env_settings::synthesize_env_settings;
pub use crate::errors::{ConfigStage, ConvertError, ConvertResult};
pub use crate::generate::{convert_devfile, generate_devfile, generate_env_settings, ConvertOptions};
pub use crate::image::{resolve, ResolvedImage};

/// Name of the single container component every converted devfile declares.
pub const CONTAINER_NAME: &str = "s2i-builder";

/// Directory the component's source is synced to inside the builder container.
pub const SOURCE_MAPPING: &str = "/tmp/projects";

/// Appended to the container env so the assemble and run scripts know they run from a devfile.
pub const CONVERTED_DEVFILE_ENV: &str = "ODO_S2I_CONVERTED_DEVFILE";

pub const METADATA_VERSION: &str = "1.0.0";
