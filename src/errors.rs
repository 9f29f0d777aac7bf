//! Error types for Contact Viewer
//!
//! Loading never fails the application: every [`LoadError`] is folded into the
//! placeholder dataset by the loader. The remaining error types cover
//! configuration and terminal output, which do stop the CLI.

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::messages;

/// Reasons the contact dataset could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request could not be sent or the body could not be read
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned {status}")]
    Status { status: u16 },

    /// Transport succeeded but the parser produced no records
    #[error("{}", messages::NO_VALID_DATA)]
    NoValidData,

    /// Local CSV file could not be read
    #[error("Failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format in {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// Configuration file already exists and force flag not set
    #[error("Configuration file already exists: {path}. Use --force to overwrite")]
    AlreadyExists { path: PathBuf },

    /// User config directory could not be determined
    #[error("Could not determine user config directory")]
    NoConfigDir,

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// File I/O error while reading or writing configuration
    #[error("Configuration file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Load error
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON output error
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Load(_) => "load",
            AppError::Config(_) => "config",
            AppError::Json(_) => "output",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Load result type alias
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
