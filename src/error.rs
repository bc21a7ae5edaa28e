//! Error types for bedrock-addon.
//!
//! All errors are strongly typed using thiserror so callers can match on
//! the exact failure cause instead of parsing log output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::ContentKind;

/// Validation errors raised before anything touches the file system.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Identifier '{identifier}' must have the form <namespace>:<name>")]
    MalformedIdentifier {
        identifier: String,
    },

    #[error("Geometry identifier '{identifier}' must have the form geometry.<name>")]
    MalformedGeometryIdentifier {
        identifier: String,
    },

    #[error("File name '{name}' would escape the output directory")]
    UnsafeFileName {
        name: String,
    },

    #[error("Nested path '{name}' is not allowed for {kind} files")]
    NestedPathNotAllowed {
        name: String,
        kind: ContentKind,
    },

    #[error("{kind} file has no identifier to derive a file name from")]
    MissingIdentifier {
        kind: ContentKind,
    },
}

/// Errors raised while rendering or writing a content file.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize {kind} file: {source}")]
    Serialize {
        kind: ContentKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Refusing to overwrite existing file {}", path.display())]
    AlreadyExists {
        path: PathBuf,
    },

    #[error("Background save task failed: {message}")]
    TaskFailed {
        message: String,
    },
}

impl WriteError {
    /// Returns the target path, if the error is tied to one.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDirectory { path, .. }
            | Self::Write { path, .. }
            | Self::AlreadyExists { path } => Some(path),
            Self::Serialize { .. } | Self::TaskFailed { .. } => None,
        }
    }
}

/// Top-level error type for bedrock-addon.
#[derive(Debug, Error)]
pub enum AddonError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

impl AddonError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a write error.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }

    /// Returns true if retrying the same save could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Validation(_) => false, // same record, same path, same error
            Self::Write(e) => match e {
                WriteError::CreateDirectory { source, .. } | WriteError::Write { source, .. } => {
                    matches!(
                        source.kind(),
                        io::ErrorKind::Interrupted
                            | io::ErrorKind::WouldBlock
                            | io::ErrorKind::TimedOut
                    )
                }
                WriteError::TaskFailed { .. } => true,
                WriteError::Serialize { .. } | WriteError::AlreadyExists { .. } => false,
            },
        }
    }
}

/// Result type alias for bedrock-addon operations.
pub type AddonResult<T> = Result<T, AddonError>;
