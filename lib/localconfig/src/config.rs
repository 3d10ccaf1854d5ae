use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    ComponentConfig, ComponentStorage, ComponentUrl, EnvVarList, LocalConfigError,
    LocalConfigResult, SourceType, CONFIG_DIR, LOCAL_CONFIG_NAME,
};

const LOCAL_CONFIG_KIND: &str = "LocalConfig";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LocalConfig {
    pub kind: String,

    pub apiversion: String,

    #[serde(rename = "ComponentSettings", default)]
    pub component_settings: ComponentSettings,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentSettings {
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_memory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Vec<StorageSettings>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Vec<UrlSettings>>,

    #[serde(default)]
    pub envs: EnvVarList,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageSettings {
    pub name: String,

    #[serde(default)]
    pub size: String,

    #[serde(default)]
    pub path: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UrlSettings {
    pub name: String,

    #[serde(default)]
    pub port: i32,

    #[serde(default)]
    pub secure: bool,
}

/// A component configuration loaded from `<context>/.odo/config.yaml`.
#[derive(Clone, Debug)]
pub struct LocalConfigInfo {
    path: PathBuf,
    config: LocalConfig,
}

impl LocalConfigInfo {
    pub fn config_path(context: &Path) -> PathBuf {
        context.join(CONFIG_DIR).join(LOCAL_CONFIG_NAME)
    }

    pub fn from_dir(context: &Path) -> LocalConfigResult<Self> {
        let path = Self::config_path(context);
        if !path.is_file() {
            return Err(LocalConfigError::MissingConfig(path));
        }

        let contents = fs::read_to_string(&path)?;
        Self::parse(path, &contents)
    }

    pub fn parse(path: PathBuf, contents: &str) -> LocalConfigResult<Self> {
        let config: LocalConfig = serde_yaml::from_str(contents)?;
        if config.kind != LOCAL_CONFIG_KIND {
            return Err(LocalConfigError::UnexpectedKind {
                expected: LOCAL_CONFIG_KIND.to_string(),
                found: config.kind,
            });
        }

        debug!("loaded component configuration from {}", path.to_string_lossy());
        Ok(Self { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &ComponentSettings {
        &self.config.component_settings
    }
}

impl ComponentConfig for LocalConfigInfo {
    fn component_type(&self) -> &str {
        self.settings().component_type.as_deref().unwrap_or_default()
    }

    fn source_type(&self) -> SourceType {
        self.settings().source_type.unwrap_or_default()
    }

    fn name(&self) -> &str {
        self.settings().name.as_deref().unwrap_or_default()
    }

    fn application(&self) -> &str {
        self.settings().application.as_deref().unwrap_or_default()
    }

    fn project(&self) -> &str {
        self.settings().project.as_deref().unwrap_or_default()
    }

    fn max_memory(&self) -> Option<&str> {
        self.settings().max_memory.as_deref()
    }

    fn debug_port(&self) -> u16 {
        self.settings().debug_port.unwrap_or_default()
    }

    fn env_vars(&self) -> &EnvVarList {
        &self.settings().envs
    }

    fn list_storage(&self) -> LocalConfigResult<Vec<ComponentStorage>> {
        let storage = self.settings().storage.as_deref().unwrap_or_default();
        storage
            .iter()
            .map(|s| {
                let invalid = |reason: &str| LocalConfigError::InvalidStorage {
                    name: s.name.clone(),
                    reason: reason.to_string(),
                };

                if s.name.is_empty() {
                    return Err(invalid("name is empty"));
                }

                if !s.path.starts_with('/') {
                    return Err(invalid("mount path must be absolute"));
                }

                Ok(ComponentStorage {
                    name: s.name.clone(),
                    size: s.size.clone(),
                    path: s.path.clone(),
                })
            })
            .collect()
    }

    fn list_urls(&self) -> LocalConfigResult<Vec<ComponentUrl>> {
        let urls = self.settings().url.as_deref().unwrap_or_default();
        urls.iter()
            .map(|u| {
                if u.name.is_empty() {
                    return Err(LocalConfigError::InvalidUrl {
                        name: u.name.clone(),
                        reason: "name is empty".to_string(),
                    });
                }

                let port = u16::try_from(u.port)
                    .ok()
                    .filter(|p| *p > 0)
                    .ok_or_else(|| LocalConfigError::InvalidUrl {
                        name: u.name.clone(),
                        reason: format!("port {} is out of range", u.port),
                    })?;

                Ok(ComponentUrl {
                    name: u.name.clone(),
                    port,
                    secure: u.secure,
                })
            })
            .collect()
    }
}
