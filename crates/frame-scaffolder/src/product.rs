//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to give the scaffolder its identity,
//! defaults and where to find template trees.

use std::path::Path;

/// Configuration for the CLI product
///
/// The product defines:
/// - Identity (name, display name, description)
/// - The directory suggested when none is given
/// - Template tree location and its environment override
/// - Where the launching package manager announces itself
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Directory name suggested by the project-name prompt
    fn default_target_dir(&self) -> &'static str;

    /// Environment variable name for overriding the templates directory
    fn template_dir_env(&self) -> &'static str;

    /// Templates directory shipped with the product
    fn bundled_templates_dir(&self) -> &'static Path;

    /// Environment variable carrying the launching package manager's user agent
    fn user_agent_env(&self) -> &'static str {
        "npm_config_user_agent"
    }
}
