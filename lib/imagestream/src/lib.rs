use thiserror::Error;

mod catalog;
mod model;
mod reference;
mod registry;

pub use crate::catalog::CatalogRegistry;
pub use crate::model::{
    DockerConfig, DockerImageMetadata, Image, ImageStream, ImageStreamImage, ImageStreamSpec,
    ImageStreamStatus, NamedTagEventList, ObjectMeta, ObjectReference, TagEvent, TagReference,
};
pub use crate::reference::ImageReference;
pub use crate::registry::ImageRegistry;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum ImageStreamError {
    #[error("invalid image catalog {path}: {reason}")]
    InvalidCatalog { path: String, reason: String },

    /// Error that may occur while I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("registry lookup failed: {0}")]
    Lookup(String),

    #[error("invalid image reference {reference}: {reason}")]
    MalformedReference { reference: String, reason: String },

    #[error("yaml serialize/deserialize error: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
}

pub type ImageStreamResult<T> = Result<T, ImageStreamError>;
