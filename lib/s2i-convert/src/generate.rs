use std::path::{Path, PathBuf};

use devfile::{Devfile, DEVFILE_NAME};
use imagestream::ImageRegistry;
use localconfig::{ComponentConfig, EnvSpecificInfo, DEFAULT_DEBUG_PORT};
use tracing::{debug, info, instrument};

use crate::{
    assemble, build_commands, build_components, inject_builder_env, resolve,
    synthesize_env_settings, ConvertError, ConvertResult,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvertOptions {
    /// Adds the builder image's S2I locations to the container env.
    pub inject_builder_env: bool,

    /// Debug port the env settings treat as implicit.
    pub default_debug_port: u16,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            inject_builder_env: false,
            default_debug_port: DEFAULT_DEBUG_PORT,
        }
    }
}

/// Builds the devfile of a component without writing anything.
///
/// Component names are not checked for uniqueness: a storage entry may share its name with
/// another one or with the builder container, and the container stays last.
#[instrument(skip_all, fields(component = config.name()))]
pub fn convert_devfile<C: ComponentConfig + ?Sized>(
    registry: &dyn ImageRegistry,
    config: &C,
    options: &ConvertOptions,
) -> ConvertResult<Devfile> {
    let image = resolve(registry, config.component_type())?;
    debug!(pull_spec = %image.pull_spec, "resolved builder image");

    let env = if options.inject_builder_env {
        inject_builder_env(config.env_vars(), config.source_type(), &image)
    } else {
        config.env_vars().clone()
    };

    let components = build_components(&image, config, &env)?;
    Ok(assemble(build_commands(), components, config))
}

/// Converts the component and writes `<workspace_dir>/devfile.yaml`, returning its path.
///
/// Nothing is written unless the whole conversion succeeds.
#[instrument(skip_all, fields(component = config.name()))]
pub fn generate_devfile<C: ComponentConfig + ?Sized>(
    registry: &dyn ImageRegistry,
    config: &C,
    workspace_dir: &Path,
    options: &ConvertOptions,
) -> ConvertResult<PathBuf> {
    let devfile = convert_devfile(registry, config, options)?;

    let path = workspace_dir.join(DEVFILE_NAME);
    devfile
        .write_to(&path)
        .map_err(|source| ConvertError::Persistence {
            path: path.clone(),
            source: Box::new(source),
        })?;

    info!("devfile is available at {}", path.display());
    Ok(path)
}

/// Writes the env settings of the component into `<workspace_dir>/.odo/env/env.yaml`.
///
/// Sections of an existing env file other than the component settings are kept.
#[instrument(skip_all, fields(component = config.name()))]
pub fn generate_env_settings<C: ComponentConfig + ?Sized>(
    config: &C,
    workspace_dir: &Path,
    options: &ConvertOptions,
) -> ConvertResult<EnvSpecificInfo> {
    let settings = synthesize_env_settings(config, options.default_debug_port);

    let persistence = |source: localconfig::LocalConfigError| ConvertError::Persistence {
        path: EnvSpecificInfo::env_path(workspace_dir),
        source: Box::new(source),
    };

    let mut env_info = EnvSpecificInfo::new(workspace_dir).map_err(persistence)?;
    env_info
        .set_component_settings(settings)
        .map_err(persistence)?;

    info!("env settings are available at {}", env_info.path().display());
    Ok(env_info)
}
