//! Fully resolved scaffolding request

use crate::project::ConflictPolicy;
use crate::templates::registry::{TemplateDescriptor, TemplateId, ValidatorId};
use std::path::PathBuf;

/// Every input the scaffolder needs, once all flags and prompts are resolved.
///
/// Built once by the workflow and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Target directory as the user typed it (formatted)
    pub target_dir: String,
    /// Absolute project root
    pub root: PathBuf,
    pub package_name: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub template: TemplateId,
    pub validator: Option<ValidatorId>,
    pub log_level: u8,
    /// `None` when the target was missing or empty
    pub conflict_policy: Option<ConflictPolicy>,
}

impl InvocationRequest {
    pub fn template_descriptor(&self) -> &'static TemplateDescriptor {
        self.template.descriptor()
    }
}
