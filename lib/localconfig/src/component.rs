use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{EnvVarList, LocalConfigResult};

/// How the component's source reaches the builder image.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumString, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceType {
    Binary,
    Git,
    #[default]
    Local,
    None,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComponentStorage {
    pub name: String,
    pub size: String,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComponentUrl {
    pub name: String,
    pub port: u16,
    pub secure: bool,
}

/// Read access to a legacy S2I component configuration.
///
/// Storage and URLs are listed through fallible lookups since the entries are validated on the
/// way out. `debug_port` is `0` when no port is configured.
pub trait ComponentConfig {
    /// Builder image in `<namespace>:<name>:<tag>` form.
    fn component_type(&self) -> &str;

    fn source_type(&self) -> SourceType;

    fn name(&self) -> &str;

    fn application(&self) -> &str;

    fn project(&self) -> &str;

    fn max_memory(&self) -> Option<&str>;

    fn debug_port(&self) -> u16;

    fn env_vars(&self) -> &EnvVarList;

    fn list_storage(&self) -> LocalConfigResult<Vec<ComponentStorage>>;

    fn list_urls(&self) -> LocalConfigResult<Vec<ComponentUrl>>;
}
