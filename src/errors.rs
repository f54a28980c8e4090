use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalaxyError {
    // Config-related errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializationFailed(#[from] toml::ser::Error),

    #[error("Failed to deserialize settings: {0}")]
    DeserializationFailed(#[from] toml::de::Error),

    #[error("Config file not found at path: {path}")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Invalid galaxy settings: {reason}")]
    InvalidSettings { reason: String },

    // Generation errors
    #[error("No planet population strategy configured")]
    MissingPopulator,

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

/// Result type alias for all operations
pub type GalaxyResult<T> = Result<T, GalaxyError>;
