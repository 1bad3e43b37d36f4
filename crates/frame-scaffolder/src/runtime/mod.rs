//! Package manager detection and dependency installation
//!
//! This module provides:
//! - Package manager detection from the `npm_config_user_agent` signal
//! - The single shell invocation that installs a generated project's dependencies

pub mod installer;
pub mod package_manager;

pub use installer::{install_command, run_shell, Installer};
pub use package_manager::{PackageManager, PackageManagerInfo};
