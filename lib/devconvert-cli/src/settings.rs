use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use devconvert_std::env::{as_boolean_truthy, parse_optional};
use directories::ProjectDirs;
use localconfig::DEFAULT_DEBUG_PORT;
use s2i_convert::ConvertOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CliResult, DevconvertCliError};

pub const DEFAULT_CONFIG_DIR: &str = ".devconvert";

pub const DEFAULT_CONFIG_NAME: &str = "devconvert.toml";

pub const DEVCONVERT_ENV_SETTINGS_PATH: &str = "DEVCONVERT_CONFIG_PATH";

pub const DEVCONVERT_ENV_INJECT_BUILDER_ENV: &str = "DEVCONVERT_INJECT_BUILDER_ENV";

pub const DEVCONVERT_ENV_DEFAULT_DEBUG_PORT: &str = "DEVCONVERT_DEFAULT_DEBUG_PORT";

/// Tool settings together with the file they were read from.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub path: PathBuf,
    pub settings: Settings,
    pub is_default_settings: bool,
}

impl Config {
    /// Loads the first settings file found, in order: `$DEVCONVERT_CONFIG_PATH`,
    /// `<context>/.devconvert/devconvert.toml`, then the global config directory. Defaults are
    /// used when none exists. A file that does not parse, or a `$DEVCONVERT_CONFIG_PATH` that
    /// does not point at a file, is an error.
    pub fn load(context: &Path) -> CliResult<Self> {
        let local = context.join(Self::config_file_path());

        let explicit = env::var_os(DEVCONVERT_ENV_SETTINGS_PATH).map(PathBuf::from);
        if let Some(path) = &explicit {
            if !path.is_file() {
                return Err(DevconvertCliError::MissingSettingsFile(path.clone()));
            }
        }

        let candidates = explicit
            .into_iter()
            .chain(Some(local.clone()))
            .chain(get_global_settings_file());

        for path in candidates {
            if path.is_file() {
                debug!("loading settings from {}", path.to_string_lossy());
                let settings = get_settings(&path)?;
                return Ok(Self {
                    path,
                    settings,
                    is_default_settings: false,
                });
            }
        }

        Ok(Self {
            path: local,
            settings: Settings::default(),
            is_default_settings: true,
        })
    }

    fn config_file_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_NAME)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Settings {
    #[serde(rename(serialize = "convert"))]
    #[serde(alias = "convert")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convert_settings: Option<ConvertSettings>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ConvertSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_debug_port: Option<u16>,

    /// Relative paths are resolved against the component's context directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_catalog: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject_builder_env: Option<bool>,
}

impl Settings {
    pub fn get_default_debug_port(&self) -> CliResult<u16> {
        let from_env = parse_optional::<_, u16>(DEVCONVERT_ENV_DEFAULT_DEBUG_PORT).map_err(|reason| {
            DevconvertCliError::InvalidEnv {
                key: DEVCONVERT_ENV_DEFAULT_DEBUG_PORT.to_string(),
                reason,
            }
        })?;

        Ok(from_env
            .or_else(|| {
                self.convert_settings
                    .as_ref()
                    .and_then(|s| s.default_debug_port)
            })
            .unwrap_or(DEFAULT_DEBUG_PORT))
    }

    pub fn get_image_catalog(&self, context: &Path) -> Option<PathBuf> {
        self.convert_settings
            .as_ref()
            .and_then(|s| s.image_catalog.as_ref())
            .map(|p| context.join(p))
    }

    pub fn get_inject_builder_env(&self) -> bool {
        as_boolean_truthy(DEVCONVERT_ENV_INJECT_BUILDER_ENV)
            || self
                .convert_settings
                .as_ref()
                .and_then(|s| s.inject_builder_env)
                .unwrap_or_default()
    }

    pub fn convert_options(&self) -> CliResult<ConvertOptions> {
        Ok(ConvertOptions {
            inject_builder_env: self.get_inject_builder_env(),
            default_debug_port: self.get_default_debug_port()?,
        })
    }
}

pub(crate) fn get_settings(path: &Path) -> CliResult<Settings> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(contents.as_str())?)
}

pub fn get_global_settings_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "devconvert", "cli").map(|dirs| dirs.config_dir().to_path_buf())
}

pub(crate) fn get_global_settings_file() -> Option<PathBuf> {
    get_global_settings_dir().map(|dir| dir.join(DEFAULT_CONFIG_NAME))
}
