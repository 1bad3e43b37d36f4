//! The create flow: resolve inputs, scaffold, install, report
//!
//! Everything that can be retried or cancelled happens in [`resolve_request`],
//! before the filesystem is touched. [`scaffold`] and [`Installer`] then run
//! to completion or fail without cleanup.
//!
//! [`Installer`]: crate::runtime::Installer

use crate::args::{format_target_dir, CreateArgs};
use crate::config::{generator, RunEnvironment};
use crate::error::Result as ScaffoldResult;
use crate::product::ProductConfig;
use crate::project::{
    default_package_name, directory, is_valid_package_name, to_valid_package_name, ConflictPolicy,
};
use crate::prompt::{Choice, Prompted, Prompter};
use crate::request::InvocationRequest;
use crate::templates::copier;
use crate::templates::registry::{TemplateId, ValidatorId, TEMPLATES};
use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Result of the interactive phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}

/// Files placed in the project by [`scaffold`]
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    /// Paths copied from the template, relative to the project root
    pub copied: Vec<PathBuf>,
    /// Generated file names
    pub generated: Vec<&'static str>,
}

impl ScaffoldReport {
    pub fn total(&self) -> usize {
        self.copied.len() + self.generated.len()
    }

    /// One-line summary naming the generated files
    pub fn summary(&self, root: &Path) -> String {
        format!(
            "Created {} files in {} (generated {})",
            self.total(),
            root.display(),
            self.generated.join(", ")
        )
    }
}

/// Fill every field of the request from flags, prompting for what is missing
/// or invalid. Never writes to disk.
pub fn resolve_request<P: Prompter, C: ProductConfig>(
    prompter: &mut P,
    config: &C,
    env: &RunEnvironment,
    args: &CreateArgs,
) -> Result<Outcome<InvocationRequest>> {
    // 1. Project name and target dir
    let target_dir = match args.target_dir() {
        Some(dir) => dir,
        None => {
            let default = config.default_target_dir();
            let Prompted::Answered(answer) = prompter.text("Project name:", default)? else {
                return Ok(Outcome::Cancelled);
            };
            Some(format_target_dir(&answer))
                .filter(|dir| !dir.is_empty())
                .unwrap_or_else(|| default.to_string())
        }
    };
    let root = env.resolve(&target_dir);

    // 2. Existing content
    let conflict_policy = if directory::has_conflict(&root)
        .with_context(|| format!("Failed to inspect {}", root.display()))?
    {
        let policy = if args.overwrite {
            ConflictPolicy::Wipe
        } else {
            let subject = if target_dir == "." {
                "Current directory".to_string()
            } else {
                format!("Target directory \"{}\"", target_dir)
            };
            let choices: Vec<_> = ConflictPolicy::CHOICES
                .iter()
                .map(|p| Choice::new(*p, p.label()))
                .collect();
            let message = format!("{} is not empty. Please choose how to proceed:", subject);
            let Prompted::Answered(policy) = prompter.select(&message, &choices)? else {
                return Ok(Outcome::Cancelled);
            };
            policy
        };
        if policy == ConflictPolicy::Abort {
            return Ok(Outcome::Cancelled);
        }
        Some(policy)
    } else {
        None
    };

    // 3. Package name
    let mut package_name = default_package_name(&root);
    if !is_valid_package_name(&package_name) {
        let suggestion = to_valid_package_name(&package_name);
        package_name = loop {
            let Prompted::Answered(answer) = prompter.text("Package name:", &suggestion)? else {
                return Ok(Outcome::Cancelled);
            };
            let answer = answer.trim().to_string();
            if is_valid_package_name(&answer) {
                break answer;
            }
            prompter.warning("Invalid package.json name")?;
        };
    }

    // 4. Template and validator
    let flagged = args
        .template
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::parse::<TemplateId>);
    let template = match flagged {
        Some(Ok(template)) => template,
        other => {
            let message = match other {
                Some(Err(invalid)) => format!("{}. Please choose from below: ", invalid),
                _ => "Select a template:".to_string(),
            };
            let choices: Vec<_> = TEMPLATES
                .iter()
                .map(|t| Choice::new(t.id, t.label()))
                .collect();
            let Prompted::Answered(template) = prompter.select(&message, &choices)? else {
                return Ok(Outcome::Cancelled);
            };
            template
        }
    };

    let descriptor = template.descriptor();
    let validator = if descriptor.has_validators() {
        let choices: Vec<Choice<ValidatorId>> = descriptor
            .validators
            .iter()
            .map(|v| Choice::new(*v, v.descriptor().label()))
            .collect();
        let Prompted::Answered(validator) = prompter.select("Select a schema validator:", &choices)?
        else {
            return Ok(Outcome::Cancelled);
        };
        Some(validator)
    } else {
        None
    };

    let request = InvocationRequest {
        target_dir,
        root,
        package_name,
        author: args.author.clone(),
        description: args.description.clone(),
        license: args.license.clone(),
        template,
        validator,
        log_level: descriptor.log_level(),
        conflict_policy,
    };
    debug!(?request, "request resolved");

    Ok(Outcome::Completed(request))
}

/// Prepare the target, copy the template layers, then write generated files
/// over whatever the copy produced.
pub fn scaffold(env: &RunEnvironment, request: &InvocationRequest) -> ScaffoldResult<ScaffoldReport> {
    directory::prepare(&request.root, request.conflict_policy)?;

    let copied = copier::copy_template(
        &env.templates_root,
        request.template,
        request.validator,
        &request.root,
    )?;

    let files = generator::generate(request)?;
    generator::write_files(&request.root, &files)?;

    Ok(ScaffoldReport {
        copied,
        generated: files.iter().map(|f| f.name).collect(),
    })
}

/// Final instructions shown once the project is ready
pub fn completion_message(env: &RunEnvironment, request: &InvocationRequest) -> String {
    let mut message = String::from("Done. Now run:\n");

    if request.root != env.cwd {
        let relative = relative_path(&env.cwd, &request.root);
        let relative = relative.display().to_string();
        if relative.chars().any(char::is_whitespace) {
            message.push_str(&format!("\n  cd \"{}\"", relative));
        } else {
            message.push_str(&format!("\n  cd {}", relative));
        }
    }

    message.push_str(&format!("\n  {}", env.package_manager.run_dev_command()));
    message
}

/// Path from `base` to `path`, both absolute
fn relative_path(base: &Path, path: &Path) -> PathBuf {
    let base: Vec<Component> = base.components().collect();
    let path: Vec<Component> = path.components().collect();
    let common = base.iter().zip(&path).take_while(|(a, b)| a == b).count();

    let mut out = PathBuf::new();
    for _ in common..base.len() {
        out.push("..");
    }
    for component in &path[common..] {
        out.push(component.as_os_str());
    }
    out
}
