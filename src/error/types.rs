//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for dynform operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FormError {
    /// Configuration Error - missing or invalid application configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Document Error - schema or UI config cannot be parsed or is malformed
    #[error("Document error: {message}")]
    Document { message: String },

    /// Validation Error - a submission was rejected
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl FormError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Document { .. } => 2,
            Self::Validation { .. } => 3,
            Self::Filesystem { .. } => 4,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a document error
    #[inline]
    pub fn document<S: Into<String>>(message: S) -> Self {
        Self::Document {
            message: message.into(),
        }
    }

    /// Create a validation error
    #[inline]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}
