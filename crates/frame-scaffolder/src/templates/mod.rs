//! Template registry and copying
//!
//! This module provides:
//! - The closed registry of templates and their validator sub-variants
//! - Recursive copying of a template tree, with commons + overlay layering

pub mod copier;
pub mod registry;

pub use copier::{copy_template, copy_tree};
pub use registry::{
    TemplateDescriptor, TemplateId, UnknownTemplate, ValidatorDescriptor, ValidatorId, TEMPLATES,
};
