//! Local, per-workspace state of the legacy S2I tooling: the component configuration that is
//! converted (`.odo/config.yaml`) and the environment settings written next to a devfile
//! (`.odo/env/env.yaml`).

use std::path::PathBuf;

use thiserror::Error;

mod component;
mod config;
mod env_vars;
mod envinfo;

pub use crate::component::{ComponentConfig, ComponentStorage, ComponentUrl, SourceType};
pub use crate::config::{
    ComponentSettings, LocalConfig, LocalConfigInfo, StorageSettings, UrlSettings,
};
pub use crate::env_vars::{EnvVar, EnvVarList};
pub use crate::envinfo::{EnvInfo, EnvSettings, EnvSpecificInfo};

pub const CONFIG_DIR: &str = ".odo";

pub const LOCAL_CONFIG_NAME: &str = "config.yaml";

pub const ENV_DIR: &str = "env";

pub const ENV_FILE_NAME: &str = "env.yaml";

pub const API_VERSION: &str = "odo.dev/v1alpha1";

/// Debug port the legacy tooling assumes when a component does not configure one.
pub const DEFAULT_DEBUG_PORT: u16 = 5858;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum LocalConfigError {
    #[error(transparent)]
    DevconvertStdError(#[from] devconvert_std::error::DevconvertStdError),

    #[error("invalid storage {name}: {reason}")]
    InvalidStorage { name: String, reason: String },

    #[error("invalid url {name}: {reason}")]
    InvalidUrl { name: String, reason: String },

    /// Error that may occur while I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("component configuration not found at {0}")]
    MissingConfig(PathBuf),

    #[error("yaml serialize/deserialize error: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("expected kind {expected} but found {found}")]
    UnexpectedKind { expected: String, found: String },
}

pub type LocalConfigResult<T> = Result<T, LocalConfigError>;
