//! Template tree copying with commons + validator overlay

use crate::error::{Result, ScaffoldError};
use crate::templates::registry::{TemplateId, ValidatorId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Name of the shared base tree inside multi-layout templates
pub const COMMONS_DIR: &str = "commons";

/// Source trees to copy, in order; later layers overwrite earlier ones
pub fn template_layers(
    templates_root: &Path,
    template: TemplateId,
    validator: Option<ValidatorId>,
) -> Vec<PathBuf> {
    let template_dir = templates_root.join(template.as_str());
    match validator {
        Some(validator) => vec![
            template_dir.join(COMMONS_DIR),
            template_dir.join(validator.as_str()),
        ],
        None => vec![template_dir],
    }
}

/// Copy a template into the target directory.
///
/// All layers are checked before anything is written, so a missing overlay
/// never leaves a half-copied commons tree behind.
pub fn copy_template(
    templates_root: &Path,
    template: TemplateId,
    validator: Option<ValidatorId>,
    target_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let layers = template_layers(templates_root, template, validator);

    if let Some(missing) = layers.iter().find(|layer| !layer.is_dir()) {
        return Err(ScaffoldError::TemplateNotFound(missing.clone()));
    }

    let mut copied = Vec::new();
    for layer in &layers {
        for file in copy_tree(layer, target_dir)? {
            if !copied.contains(&file) {
                copied.push(file);
            }
        }
    }

    Ok(copied)
}

/// Recursively copy `source` into `target`, overwriting same-path files and
/// leaving unrelated files in `target` alone. Returns the relative paths copied.
pub fn copy_tree(source: &Path, target: &Path) -> Result<Vec<PathBuf>> {
    debug!(from = %source.display(), to = %target.display(), "copying tree");

    fs::create_dir_all(target).map_err(|e| ScaffoldError::io(target, e))?;

    let mut copied = Vec::new();
    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| ScaffoldError::Walk {
            root: source.to_path_buf(),
            source: e,
        })?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir yields paths under its root")
            .to_path_buf();
        let dest = target.join(&relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|e| ScaffoldError::io(&dest, e))?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
            }
            fs::copy(entry.path(), &dest).map_err(|e| ScaffoldError::Copy {
                from: entry.path().to_path_buf(),
                to: dest.clone(),
                source: e,
            })?;
            copied.push(relative);
        }
    }

    Ok(copied)
}
