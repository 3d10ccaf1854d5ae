use imagestream::DockerConfig;
use localconfig::{EnvVarList, SourceType};
use tracing::debug;

use crate::ResolvedImage;

pub const ENV_S2I_SCRIPTS_URL: &str = "ODO_S2I_SCRIPTS_URL";
pub const ENV_S2I_SCRIPTS_PROTOCOL: &str = "ODO_S2I_SCRIPTS_PROTOCOL";
pub const ENV_S2I_SRC_BIN_PATH: &str = "ODO_S2I_SRC_BIN_PATH";
pub const ENV_S2I_DEPLOYMENT_DIR: &str = "ODO_S2I_DEPLOYMENT_DIR";
pub const ENV_S2I_WORKING_DIR: &str = "ODO_S2I_WORKING_DIR";
pub const ENV_S2I_BUILDER_IMG: &str = "ODO_S2I_BUILDER_IMG";
pub const ENV_SRC_BACKUP_DIR: &str = "ODO_SRC_BACKUP_DIR";

const SCRIPTS_URL_LABEL: &str = "io.openshift.s2i.scripts-url";
const SCRIPTS_URL_ENV: &str = "STI_SCRIPTS_URL";
const DESTINATION_LABEL: &str = "io.openshift.s2i.destination";
const DEPLOYMENT_DIR_LABELS: [&str; 3] = [
    "com.redhat.deployments-dir",
    "org.jboss.deployments-dir",
    "org.jboss.container.deployments-dir",
];

const DEFAULT_SCRIPTS_URL: &str = "image:///usr/libexec/s2i";
const DEFAULT_SRC_BIN_PATH: &str = "/tmp";
const DEFAULT_WORKING_DIR: &str = "/opt/app-root";
const SRC_BACKUP_DIR: &str = "/opt/app-root/src-backup";

/// S2I locations baked into a builder image.
#[derive(Clone, Debug, PartialEq)]
pub struct S2IPaths {
    pub scripts_protocol: String,
    pub scripts_url: String,
    pub src_bin_path: String,
    pub deployment_dir: String,
    pub working_dir: String,
    pub builder_image: String,
}

impl S2IPaths {
    pub fn from_image(image: &ResolvedImage) -> Self {
        let default_config = DockerConfig::default();
        let config = image.image.docker_config().unwrap_or(&default_config);

        let scripts = config
            .label(SCRIPTS_URL_LABEL)
            .or_else(|| config.env_value(SCRIPTS_URL_ENV).filter(|v| !v.is_empty()))
            .unwrap_or(DEFAULT_SCRIPTS_URL);
        let (scripts_protocol, scripts_url) = match scripts.split_once("://") {
            Some((scheme, rest)) => (format!("{scheme}://"), rest.to_string()),
            None => (String::new(), scripts.to_string()),
        };

        let deployment_dir = DEPLOYMENT_DIR_LABELS
            .iter()
            .find_map(|label| config.label(label))
            .unwrap_or_default();

        Self {
            scripts_protocol,
            scripts_url,
            src_bin_path: config
                .label(DESTINATION_LABEL)
                .unwrap_or(DEFAULT_SRC_BIN_PATH)
                .to_string(),
            deployment_dir: deployment_dir.to_string(),
            working_dir: config
                .working_dir
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(DEFAULT_WORKING_DIR)
                .to_string(),
            builder_image: image.pull_spec.clone(),
        }
    }
}

/// Returns `env` enriched with the S2I locations of the builder image.
///
/// Variables already present are overwritten in place, others are appended.
pub fn inject_builder_env(
    env: &EnvVarList,
    source_type: SourceType,
    image: &ResolvedImage,
) -> EnvVarList {
    let paths = S2IPaths::from_image(image);
    debug!(?paths, "injecting builder image environment");

    let mut env = env.clone();
    env.set(ENV_S2I_SCRIPTS_URL, paths.scripts_url);
    env.set(ENV_S2I_SCRIPTS_PROTOCOL, paths.scripts_protocol);
    env.set(ENV_S2I_SRC_BIN_PATH, paths.src_bin_path);
    env.set(ENV_S2I_DEPLOYMENT_DIR, paths.deployment_dir);
    env.set(ENV_S2I_WORKING_DIR, paths.working_dir);
    env.set(ENV_S2I_BUILDER_IMG, paths.builder_image);
    if source_type == SourceType::Local {
        env.set(ENV_SRC_BACKUP_DIR, SRC_BACKUP_DIR);
    }

    env
}
