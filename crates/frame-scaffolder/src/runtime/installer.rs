//! Dependency installation through the detected package manager

use crate::error::{Result, ScaffoldError};
use crate::request::InvocationRequest;
use crate::runtime::package_manager::PackageManagerInfo;
use crate::templates::registry::{
    ValidatorId, BASE_DEPENDENCIES, BASE_DEV_DEPENDENCIES, E2E_DEV_DEPENDENCIES,
};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// Lines of stderr kept in the error when installation fails
const STDERR_TAIL_LINES: usize = 20;

/// Builds and runs the single shell command that installs a project's dependencies
#[derive(Debug, Clone)]
pub struct Installer {
    command: String,
}

impl Installer {
    pub fn new(package_manager: &PackageManagerInfo, request: &InvocationRequest) -> Self {
        Self {
            command: install_command(package_manager, request),
        }
    }

    /// The full shell command string
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run the command to completion. No timeout: large installs can take a while.
    pub async fn install(&self) -> Result<()> {
        run_shell(&self.command).await
    }
}

/// Compose `cd <root> && <add> ... && <add> -D ...` for the request
pub fn install_command(package_manager: &PackageManagerInfo, request: &InvocationRequest) -> String {
    let add = package_manager.add_command();
    let validator = request.validator.map(|v| v.descriptor());

    let mut steps = vec![
        format!("cd {}", shell_quote(&request.root)),
        format!("{} {}", add, BASE_DEPENDENCIES.join(" ")),
        format!("{} -D {}", add, BASE_DEV_DEPENDENCIES.join(" ")),
        format!("{} {}", add, ValidatorId::dependencies(request.validator).join(" ")),
    ];

    if let Some(dev) = validator.map(|v| v.dev_dependencies).filter(|d| !d.is_empty()) {
        steps.push(format!("{} -D {}", add, dev.join(" ")));
    }

    if request.template_descriptor().has_e2e {
        steps.push(format!("{} -D {}", add, E2E_DEV_DEPENDENCIES.join(" ")));
    }

    steps.join(" && ")
}

/// Quote `path` as a single word for the shell [`run_shell`] uses
fn shell_quote(path: &Path) -> String {
    let raw = path.display().to_string();
    if cfg!(windows) {
        format!("\"{}\"", raw)
    } else {
        format!("'{}'", raw.replace('\'', r"'\''"))
    }
}

/// Run `command` through the platform shell, keeping only the exit status and
/// a short stderr tail for the error message.
pub async fn run_shell(command: &str) -> Result<()> {
    debug!(command, "running install command");

    let mut cmd = if cfg!(windows) {
        let mut c = TokioCommand::new("cmd");
        c.arg("/C");
        c
    } else {
        let mut c = TokioCommand::new("sh");
        c.arg("-c");
        c
    };

    let output = cmd
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| ScaffoldError::Spawn {
            command: command.to_string(),
            source: e,
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");

    Err(ScaffoldError::InstallFailed {
        code: output.status.code().unwrap_or(-1),
        stderr: tail,
    })
}
