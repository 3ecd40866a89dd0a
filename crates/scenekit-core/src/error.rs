//! Error handling for SceneKit
//!
//! Interactive editing never fails: operations on an unmounted surface or a
//! stale selection are silent no-ops. Errors only surface from the edges of
//! the system, such as configuration files and image export.
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// Main error type for SceneKit
#[derive(Error, Debug)]
pub enum Error {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding or conversion failed
    #[error("Image error: {reason}")]
    Image {
        /// The reason the image operation failed.
        reason: String,
    },

    /// A configuration value is not usable
    #[error("Invalid configuration '{key}': {reason}")]
    InvalidConfig {
        /// The offending key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The drawing surface has not been mounted yet
    #[error("Surface not mounted")]
    NotMounted,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::InvalidConfig { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
