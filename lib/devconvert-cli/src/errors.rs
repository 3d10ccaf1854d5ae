use std::path::PathBuf;

use thiserror::Error;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum DevconvertCliError {
    #[error(transparent)]
    ConvertError(#[from] s2i_convert::ConvertError),

    #[error(transparent)]
    DevconvertStdError(#[from] devconvert_std::error::DevconvertStdError),

    #[error(transparent)]
    DevfileError(#[from] devfile::DevfileError),

    #[error("image catalog error: {0}")]
    ImageStreamError(#[from] imagestream::ImageStreamError),

    #[error("invalid value for {key}: {reason}")]
    InvalidEnv { key: String, reason: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    LocalConfigError(#[from] localconfig::LocalConfigError),

    #[error("no image catalog configured; pass --image-catalog or set image_catalog in {}", .0.display())]
    MissingImageCatalog(PathBuf),

    #[error("settings file {} does not exist", .0.display())]
    MissingSettingsFile(PathBuf),

    /// Errors that may occur when deserializing types from TOML format.
    #[error("toml deserialize error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

pub type CliResult<T> = Result<T, DevconvertCliError>;
