//! Target directory planning and package naming

pub mod directory;
pub mod package_name;

pub use directory::{has_conflict, is_empty_dir, ConflictPolicy, VCS_DIR};
pub use package_name::{default_package_name, is_valid_package_name, to_valid_package_name};
