use std::path::PathBuf;

use imagestream::{
    CatalogRegistry, ImageRegistry, ImageStream, ImageStreamError, ImageStreamImage,
    ImageStreamResult,
};
use localconfig::{
    ComponentConfig, ComponentStorage, ComponentUrl, EnvVarList, LocalConfigError,
    LocalConfigInfo, LocalConfigResult, SourceType,
};
use testing::fixtures::{IMAGE_CATALOG, LOCAL_CONFIG};

use crate::{resolve, ConfigStage, ResolvedImage};

pub(crate) fn catalog() -> CatalogRegistry {
    serde_yaml::from_str(IMAGE_CATALOG).unwrap()
}

pub(crate) fn config() -> LocalConfigInfo {
    config_from(LOCAL_CONFIG)
}

pub(crate) fn config_from(contents: &str) -> LocalConfigInfo {
    LocalConfigInfo::parse(PathBuf::from(".odo/config.yaml"), contents).unwrap()
}

pub(crate) fn resolved_image() -> ResolvedImage {
    resolve(&catalog(), "openshift:nodejs:12").unwrap()
}

/// Registry whose every lookup fails as if the cluster could not be reached.
pub(crate) struct UnreachableRegistry;

impl ImageRegistry for UnreachableRegistry {
    fn image_stream(&self, _: &str, _: &str, _: &str) -> ImageStreamResult<Option<ImageStream>> {
        Err(ImageStreamError::Lookup("connection refused".to_string()))
    }

    fn image_stream_image(
        &self,
        _: &ImageStream,
        _: &str,
    ) -> ImageStreamResult<Option<ImageStreamImage>> {
        Err(ImageStreamError::Lookup("connection refused".to_string()))
    }
}

/// Delegates to a real configuration but fails listing one stage.
pub(crate) struct FailingConfig {
    pub inner: LocalConfigInfo,
    pub stage: ConfigStage,
}

impl ComponentConfig for FailingConfig {
    fn component_type(&self) -> &str {
        self.inner.component_type()
    }

    fn source_type(&self) -> SourceType {
        self.inner.source_type()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn application(&self) -> &str {
        self.inner.application()
    }

    fn project(&self) -> &str {
        self.inner.project()
    }

    fn max_memory(&self) -> Option<&str> {
        self.inner.max_memory()
    }

    fn debug_port(&self) -> u16 {
        self.inner.debug_port()
    }

    fn env_vars(&self) -> &EnvVarList {
        self.inner.env_vars()
    }

    fn list_storage(&self) -> LocalConfigResult<Vec<ComponentStorage>> {
        match self.stage {
            ConfigStage::Storage => Err(LocalConfigError::InvalidStorage {
                name: "data".to_string(),
                reason: "mount path must be absolute".to_string(),
            }),
            ConfigStage::Urls => self.inner.list_storage(),
        }
    }

    fn list_urls(&self) -> LocalConfigResult<Vec<ComponentUrl>> {
        match self.stage {
            ConfigStage::Urls => Err(LocalConfigError::InvalidUrl {
                name: "http".to_string(),
                reason: "port 0 is out of range".to_string(),
            }),
            ConfigStage::Storage => self.inner.list_urls(),
        }
    }
}
