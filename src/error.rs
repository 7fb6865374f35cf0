//! Error types for stub generation

use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur while generating the documentation tree
#[derive(Debug)]
pub enum ScaffoldError {
    /// A filesystem operation failed (listing, directory creation, write)
    Io { path: PathBuf, source: io::Error },
    /// A group listing was required to contain a module that was not there
    MissingModule {
        group: &'static str,
        module: &'static str,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::Io { path, source } => {
                write!(f, "filesystem error at {}: {}", path.display(), source)
            }
            ScaffoldError::MissingModule { group, module } => {
                write!(
                    f,
                    "expected module '{}' in the {} listing, but it was not discovered",
                    module, group
                )
            }
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io { source, .. } => Some(source),
            ScaffoldError::MissingModule { .. } => None,
        }
    }
}
