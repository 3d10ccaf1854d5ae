//! Devfile 2.0.0 documents: the subset of the schema produced by the S2I conversion, validation of
//! the cross references between commands and components, and YAML rendering.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

mod commands;
mod components;
mod validate;

pub use crate::commands::{Command, CommandGroup, CommandGroupKind, ExecCommand};
pub use crate::components::{
    Component, ComponentKind, ContainerComponent, Endpoint, EnvVar, VolumeComponent, VolumeMount,
};

pub const DEVFILE_NAME: &str = "devfile.yaml";

pub const SCHEMA_VERSION_200: &str = "2.0.0";

#[remain::sorted]
#[derive(Debug, Error)]
pub enum DevfileError {
    #[error(transparent)]
    DevconvertStdError(#[from] devconvert_std::error::DevconvertStdError),

    #[error("command id {0} is declared more than once")]
    DuplicateCommandId(String),

    #[error("component name {0} is declared more than once")]
    DuplicateComponentName(String),

    /// Error that may occur while I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("more than one default {0} command")]
    MultipleDefaultCommands(CommandGroupKind),

    #[error("yaml serialize/deserialize error: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("command {command} references unknown container component {component}")]
    UnknownCommandComponent { command: String, component: String },

    #[error("component {component} mounts unknown volume {volume}")]
    UnknownVolume { component: String, volume: String },
}

pub type DevfileResult<T> = Result<T, DevfileError>;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Devfile {
    pub schema_version: String,

    pub metadata: Metadata,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<Command>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Devfile {
    pub fn new(schema_version: impl Into<String>) -> Self {
        Self {
            schema_version: schema_version.into(),
            metadata: Metadata::default(),
            commands: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn from_path(path: &Path) -> DevfileResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Checks that command ids and component names are unique, that every group has at most one
    /// default command and that commands and volume mounts only reference declared components.
    pub fn validate(&self) -> DevfileResult<()> {
        validate::validate(self)
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn default_command(&self, kind: CommandGroupKind) -> Option<&Command> {
        self.commands.iter().find(|c| {
            c.exec
                .group
                .as_ref()
                .is_some_and(|g| g.kind == kind && g.is_default)
        })
    }

    pub fn to_yaml(&self) -> DevfileResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Renders the whole document before touching `path` so a serialization failure never leaves
    /// a partially written devfile behind.
    pub fn write_to(&self, path: &Path) -> DevfileResult<()> {
        let content = self.to_yaml()?;
        devconvert_std::fs::write_atomic(path, content)?;
        debug!("wrote devfile to {}", path.to_string_lossy());
        Ok(())
    }
}
