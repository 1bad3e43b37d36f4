//! Frame Scaffolder - project scaffolding for @novice1/frame applications
//!
//! This library creates a new TypeScript project from one of a fixed set of
//! templates: it copies the template tree, writes `package.json`, `.env`,
//! `.gitignore` and `nodemon.json`, then installs dependencies through the
//! package manager that launched it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Registry, tree copying, package naming, file
//!   generation, dependency installation
//! - **Layer 2: Workflow Orchestration** - [`workflow`] resolves an
//!   [`InvocationRequest`] through any [`Prompter`], then scaffolds it
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use frame_scaffolder::{workflow, RunEnvironment, Outcome};
//!
//! let env = RunEnvironment::from_process(&MyConfig, None)?;
//! if let Outcome::Completed(request) =
//!     workflow::resolve_request(&mut my_prompter, &MyConfig, &env, &args)?
//! {
//!     workflow::scaffold(&env, &request)?;
//!     Installer::new(&env.package_manager, &request).install().await?;
//! }
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod product;
pub mod project;
pub mod prompt;
pub mod request;
pub mod runtime;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use args::{format_target_dir, help_message, CreateArgs};
pub use config::RunEnvironment;
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use project::{is_valid_package_name, to_valid_package_name, ConflictPolicy};
pub use prompt::{Choice, Prompted, Prompter};
pub use request::InvocationRequest;
pub use runtime::{Installer, PackageManager, PackageManagerInfo};
pub use templates::{TemplateId, ValidatorId};
pub use workflow::Outcome;

#[cfg(feature = "tui")]
pub use tui::run;
