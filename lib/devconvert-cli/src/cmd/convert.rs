use std::env;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use imagestream::CatalogRegistry;
use localconfig::{ComponentConfig, LocalConfigInfo};
use s2i_convert::{convert_devfile, generate_devfile, generate_env_settings};
use serde::Serialize;
use tracing::{debug, info};

use crate::settings::Config;
use crate::{CliResult, DevconvertCliError};

#[derive(Clone, Debug, Default)]
pub struct ConvertArgs {
    pub context: Option<PathBuf>,
    pub image_catalog: Option<PathBuf>,
    pub inject_builder_env: bool,
    pub dry_run: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConvertSummary {
    pub component: String,
    pub component_type: String,
    pub commands: usize,
    pub components: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub devfile_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_path: Option<PathBuf>,

    /// Rendered devfile, only set on dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devfile: Option<String>,
}

impl Display for ConvertSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(devfile) = &self.devfile {
            return write!(f, "{devfile}");
        }

        writeln!(
            f,
            "Converted {} ({}) into {} commands and {} components",
            self.component, self.component_type, self.commands, self.components
        )?;
        if let Some(path) = &self.devfile_path {
            writeln!(f, "devfile: {}", path.to_string_lossy())?;
        }
        if let Some(path) = &self.env_path {
            write!(f, "env: {}", path.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Converts the S2I component found in the context directory into a devfile and env settings.
///
/// Flags override settings: an explicit image catalog wins over the configured one and
/// `inject_builder_env` can only turn injection on.
pub fn invoke(args: ConvertArgs) -> CliResult<ConvertSummary> {
    let context = match args.context {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    let config = Config::load(&context)?;
    let mut options = config.settings.convert_options()?;
    options.inject_builder_env |= args.inject_builder_env;

    let catalog_path = args
        .image_catalog
        .or_else(|| config.settings.get_image_catalog(&context))
        .ok_or_else(|| DevconvertCliError::MissingImageCatalog(config.path.clone()))?;
    debug!("using image catalog {}", catalog_path.to_string_lossy());
    let registry = CatalogRegistry::from_path(&catalog_path)?;

    let component = LocalConfigInfo::from_dir(&context)?;
    info!(
        "converting component {} of type {}",
        component.name(),
        component.component_type()
    );

    if args.dry_run {
        let devfile = convert_devfile(&registry, &component, &options)?;
        return Ok(ConvertSummary {
            component: component.name().to_string(),
            component_type: component.component_type().to_string(),
            commands: devfile.commands.len(),
            components: devfile.components.len(),
            devfile_path: None,
            env_path: None,
            devfile: Some(devfile.to_yaml()?),
        });
    }

    let devfile_path = generate_devfile(&registry, &component, &context, &options)?;
    let env_info = generate_env_settings(&component, &context, &options)?;
    let devfile = devfile::Devfile::from_path(&devfile_path)?;

    Ok(ConvertSummary {
        component: component.name().to_string(),
        component_type: component.component_type().to_string(),
        commands: devfile.commands.len(),
        components: devfile.components.len(),
        devfile_path: Some(devfile_path),
        env_path: Some(env_info.path().to_path_buf()),
        devfile: None,
    })
}
