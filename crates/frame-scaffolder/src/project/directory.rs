//! Target directory inspection and conflict handling

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Version-control metadata folder that never counts as content and is never wiped
pub const VCS_DIR: &str = ".git";

/// How to treat a target directory that already has content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Stop without touching anything
    Abort,
    /// Remove everything except the VCS folder
    Wipe,
    /// Keep existing files; same-path template files overwrite them
    Merge,
}

impl ConflictPolicy {
    pub const CHOICES: [ConflictPolicy; 3] = [
        ConflictPolicy::Abort,
        ConflictPolicy::Wipe,
        ConflictPolicy::Merge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConflictPolicy::Abort => "Cancel operation",
            ConflictPolicy::Wipe => "Remove existing files and continue",
            ConflictPolicy::Merge => "Ignore files and continue",
        }
    }
}

/// A directory is empty when it has no entries, or only the VCS folder
pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        names.push(entry?.file_name());
        if names.len() > 1 {
            return Ok(false);
        }
    }
    Ok(names.is_empty() || names[0] == VCS_DIR)
}

/// Whether the target already holds content that needs a conflict policy
pub fn has_conflict(path: &Path) -> io::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    Ok(!is_empty_dir(path)?)
}

/// Remove every entry of `dir` except the VCS folder. A missing directory is a no-op.
pub fn empty_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    let entries = fs::read_dir(dir).map_err(|e| ScaffoldError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ScaffoldError::io(dir, e))?;
        if entry.file_name() == VCS_DIR {
            continue;
        }

        let path = entry.path();
        debug!(path = %path.display(), "removing");
        let file_type = entry.file_type().map_err(|e| ScaffoldError::io(&path, e))?;
        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| ScaffoldError::io(&path, e))?;
    }

    Ok(())
}

/// Apply a resolved policy and make sure the target (and its parents) exist
pub fn prepare(dir: &Path, policy: Option<ConflictPolicy>) -> Result<()> {
    if policy == Some(ConflictPolicy::Wipe) {
        empty_dir(dir)?;
    }
    fs::create_dir_all(dir).map_err(|e| ScaffoldError::io(dir, e))
}
