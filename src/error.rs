use crate::mutation::Notice;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading, configuring or saving a configuration.
///
/// Structural misses during editing are not errors: they are reported as
/// [`Notice`]s inside an [`EditReport`](crate::EditReport). A driver that wants
/// them to be fatal can call [`EditReport::into_result`](crate::EditReport::into_result),
/// which produces [`ConfigError::Unresolved`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rejected parser or editor options
    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },

    /// One or more edits could not be applied
    #[error("{} edit(s) could not be applied: {}", .notices.len(), join_notices(.notices))]
    Unresolved { notices: Vec<Notice> },
}

impl ConfigError {
    /// Create an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid options error
    pub fn invalid_options(reason: impl Into<String>) -> Self {
        ConfigError::InvalidOptions {
            reason: reason.into(),
        }
    }

    /// Collect unapplied edits into one error
    pub fn unresolved(notices: Vec<Notice>) -> Self {
        ConfigError::Unresolved { notices }
    }
}

fn join_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
