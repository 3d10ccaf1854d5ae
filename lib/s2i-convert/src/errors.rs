use std::path::PathBuf;

use imagestream::ImageStreamError;
use localconfig::LocalConfigError;
use strum::Display;
use thiserror::Error;

/// Part of the legacy configuration that was being read when a lookup failed.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigStage {
    Storage,
    Urls,
}

#[remain::sorted]
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("image stream {stream} has no tag with a pull specification")]
    CorruptImageStream { stream: String },

    #[error("image for {reference} not found")]
    ImageNotFound { reference: String },

    #[error("image stream {reference} not found")]
    ImageStreamNotFound { reference: String },

    #[error("failed to read {stage} of component {component}: {source}")]
    LegacyConfigRead {
        component: String,
        stage: ConfigStage,
        #[source]
        source: LocalConfigError,
    },

    #[error("invalid image reference {reference}: {reason}")]
    MalformedReference { reference: String, reason: String },

    #[error("failed to write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("registry lookup for {reference} failed: {source}")]
    Registry {
        reference: String,
        #[source]
        source: ImageStreamError,
    },
}

pub type ConvertResult<T> = Result<T, ConvertError>;
