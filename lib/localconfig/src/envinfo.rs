use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{LocalConfigError, LocalConfigResult, API_VERSION, CONFIG_DIR, ENV_DIR, ENV_FILE_NAME};

const ENV_INFO_KIND: &str = "EnvInfo";

/// Component settings recorded next to a devfile.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvSettings {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub project: String,

    #[serde(default)]
    pub app_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_port: Option<u16>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnvInfo {
    pub kind: String,

    pub apiversion: String,

    #[serde(rename = "ComponentSettings", default)]
    pub component_settings: EnvSettings,

    /// Sections written by other tools are carried over untouched.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yaml::Value>,
}

impl Default for EnvInfo {
    fn default() -> Self {
        Self {
            kind: ENV_INFO_KIND.to_string(),
            apiversion: API_VERSION.to_string(),
            component_settings: EnvSettings::default(),
            other: BTreeMap::new(),
        }
    }
}

/// The env file of one workspace, loaded if it already exists.
#[derive(Clone, Debug)]
pub struct EnvSpecificInfo {
    path: PathBuf,
    info: EnvInfo,
    exists: bool,
}

impl EnvSpecificInfo {
    pub fn env_path(context: &Path) -> PathBuf {
        context.join(CONFIG_DIR).join(ENV_DIR).join(ENV_FILE_NAME)
    }

    pub fn new(context: &Path) -> LocalConfigResult<Self> {
        let path = Self::env_path(context);
        if !path.is_file() {
            return Ok(Self {
                path,
                info: EnvInfo::default(),
                exists: false,
            });
        }

        let info: EnvInfo = serde_yaml::from_str(&fs::read_to_string(&path)?)?;
        if info.kind != ENV_INFO_KIND {
            return Err(LocalConfigError::UnexpectedKind {
                expected: ENV_INFO_KIND.to_string(),
                found: info.kind,
            });
        }

        Ok(Self {
            path,
            info,
            exists: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn info(&self) -> &EnvInfo {
        &self.info
    }

    pub fn component_settings(&self) -> &EnvSettings {
        &self.info.component_settings
    }

    /// Replaces the component settings and writes the file.
    pub fn set_component_settings(&mut self, settings: EnvSettings) -> LocalConfigResult<()> {
        self.info.component_settings = settings;
        let content = serde_yaml::to_string(&self.info)?;
        devconvert_std::fs::write_atomic(&self.path, content)?;
        self.exists = true;
        debug!("wrote env settings to {}", self.path.to_string_lossy());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::{EnvSettings, EnvSpecificInfo};

    fn settings(debug_port: Option<u16>) -> EnvSettings {
        EnvSettings {
            name: "nodejs-app".to_string(),
            project: "myproject".to_string(),
            app_name: "app".to_string(),
            debug_port,
        }
    }

    #[test]
    fn should_create_env_file() {
        let dir = TempDir::new().unwrap();
        let mut env = EnvSpecificInfo::new(dir.path()).unwrap();
        assert!(!env.exists());

        env.set_component_settings(settings(Some(5858))).unwrap();

        assert!(env.exists());
        let reloaded = EnvSpecificInfo::new(dir.path()).unwrap();
        assert_eq!(&settings(Some(5858)), reloaded.component_settings());
        assert_eq!("EnvInfo", reloaded.info().kind);
    }

    #[test]
    fn absent_debug_port_is_not_written() {
        let dir = TempDir::new().unwrap();
        let mut env = EnvSpecificInfo::new(dir.path()).unwrap();

        env.set_component_settings(settings(None)).unwrap();

        let content = fs::read_to_string(env.path()).unwrap();
        assert!(content.contains("AppName: app"));
        assert!(!content.contains("DebugPort"));
    }

    #[test]
    fn should_preserve_unrelated_sections_on_update() {
        let dir = TempDir::new().unwrap();
        let path = EnvSpecificInfo::env_path(dir.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            "kind: EnvInfo\napiversion: odo.dev/v1alpha1\nComponentSettings:\n  Name: old\nPush:\n  - Kind: Devfile\n",
        )
        .unwrap();

        let mut env = EnvSpecificInfo::new(dir.path()).unwrap();
        assert_eq!("old", env.component_settings().name);
        env.set_component_settings(settings(None)).unwrap();

        let reloaded = EnvSpecificInfo::new(dir.path()).unwrap();
        assert_eq!("nodejs-app", reloaded.component_settings().name);
        assert!(reloaded.info().other.contains_key("Push"));
    }
}
