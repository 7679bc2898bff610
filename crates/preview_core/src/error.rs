//! Error types for the image preview.

use thiserror::Error;

/// Errors that can occur while configuring the preview or reading a file.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// The platform failed to read the selected file
    #[error("Failed to read '{name}': {message}")]
    ReadFailed {
        /// Name of the file being read
        name: String,
        /// Description reported by the platform
        message: String,
    },

    /// A string that should be a data URL is not one
    #[error("Invalid data URL: {message}")]
    InvalidDataUrl {
        /// What is wrong with the input
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Config file written for a different format version
    #[error("Unsupported config version: expected {expected}, found {found}")]
    UnsupportedConfigVersion {
        /// Version this build understands
        expected: u32,
        /// Version found in the config
        found: u32,
    },

    /// Config parsed but holds unusable values
    #[error("Invalid config: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },

    /// No element with the given id exists in the document
    #[error("Element not found: #{id}")]
    ElementNotFound {
        /// The id that was looked up
        id: String,
    },

    /// Event target or element is not an `<input type="file">`
    #[error("Not a file input: {0}")]
    NotAFileInput(String),

    /// Exception thrown by a browser API
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl PreviewError {
    /// Create a read failure for the named file.
    pub fn read_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReadFailed {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid data URL error.
    pub fn invalid_data_url(message: impl Into<String>) -> Self {
        Self::InvalidDataUrl {
            message: message.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an element-not-found error.
    pub fn element_not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound { id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, PreviewError>;
