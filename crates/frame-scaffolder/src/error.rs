//! Error types for scaffolding operations

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures once the project is being written to disk.
///
/// Prompt cancellation is not represented here; see [`crate::prompt::Prompted`].
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Template directory not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Failed to read template tree {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize {file}: {source}")]
    Serialize {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Dependency installation failed with exit code {code}\n{stderr}")]
    InstallFailed { code: i32, stderr: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
