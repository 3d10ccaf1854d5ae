use devfile::{
    Component, ComponentKind, ContainerComponent, Endpoint, EnvVar, VolumeComponent, VolumeMount,
};
use localconfig::{ComponentConfig, EnvVarList};
use tracing::debug;

use crate::{
    ConfigStage, ConvertError, ConvertResult, ResolvedImage, CONTAINER_NAME,
    CONVERTED_DEVFILE_ENV, SOURCE_MAPPING,
};

/// Translates the component's storage, URLs and `env` into devfile components.
///
/// One volume component is returned per storage entry, in configuration order, followed by the
/// builder container as the last component. `env` is copied in order and the conversion marker
/// is always appended as the final variable.
pub fn build_components<C: ComponentConfig + ?Sized>(
    image: &ResolvedImage,
    config: &C,
    env: &EnvVarList,
) -> ConvertResult<Vec<Component>> {
    debug!("Set devfile components from s2i data");

    let storage = config
        .list_storage()
        .map_err(|source| ConvertError::LegacyConfigRead {
            component: config.name().to_string(),
            stage: ConfigStage::Storage,
            source,
        })?;
    let urls = config
        .list_urls()
        .map_err(|source| ConvertError::LegacyConfigRead {
            component: config.name().to_string(),
            stage: ConfigStage::Urls,
            source,
        })?;

    let mut components = Vec::with_capacity(storage.len() + 1);
    let mut volume_mounts = Vec::with_capacity(storage.len());
    for s in storage {
        components.push(Component {
            name: s.name.clone(),
            kind: ComponentKind::Volume(VolumeComponent {
                size: Some(s.size).filter(|size| !size.is_empty()),
            }),
        });
        volume_mounts.push(VolumeMount {
            name: s.name,
            path: Some(s.path),
        });
    }

    let mut env_vars: Vec<EnvVar> = env
        .iter()
        .map(|e| EnvVar::new(e.name.as_str(), e.value.as_str()))
        .collect();
    env_vars.push(EnvVar::new(CONVERTED_DEVFILE_ENV, "true"));

    let endpoints = urls
        .into_iter()
        .map(|u| Endpoint {
            name: u.name,
            target_port: u.port,
            secure: u.secure,
        })
        .collect();

    components.push(Component {
        name: CONTAINER_NAME.to_string(),
        kind: ComponentKind::Container(ContainerComponent {
            image: image.pull_spec.clone(),
            mount_sources: Some(true),
            source_mapping: Some(SOURCE_MAPPING.to_string()),
            memory_limit: config.max_memory().map(str::to_string),
            env: env_vars,
            volume_mounts,
            endpoints,
        }),
    });

    Ok(components)
}
