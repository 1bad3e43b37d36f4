//! Process-wide inputs captured once at start-up

use crate::product::ProductConfig;
use crate::runtime::PackageManagerInfo;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Snapshot of the process environment the workflow runs against
#[derive(Debug, Clone)]
pub struct RunEnvironment {
    /// Working directory relative target paths resolve against
    pub cwd: PathBuf,
    pub package_manager: PackageManagerInfo,
    /// Directory holding one sub-directory per template
    pub templates_root: PathBuf,
}

impl RunEnvironment {
    /// Read the current process: working directory, package manager signal and
    /// template location (`template_dir`, then the product's env override, then
    /// `templates/` beside the executable, then the bundled directory).
    pub fn from_process<C: ProductConfig>(config: &C, template_dir: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        let user_agent = std::env::var(config.user_agent_env()).ok();
        let from_env = std::env::var_os(config.template_dir_env()).map(PathBuf::from);
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("templates")));

        let templates_root = resolve_templates_root(
            template_dir,
            from_env,
            beside_exe,
            config.bundled_templates_dir(),
        );

        Ok(Self {
            cwd: cwd.clone(),
            package_manager: PackageManagerInfo::from_user_agent(user_agent.as_deref()),
            templates_root: absolutize(&cwd, &templates_root),
        })
    }

    /// Resolve a user-supplied target against the working directory
    pub fn resolve(&self, target: &str) -> PathBuf {
        absolutize(&self.cwd, Path::new(target))
    }
}

fn resolve_templates_root(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    beside_exe: Option<PathBuf>,
    bundled: &Path,
) -> PathBuf {
    flag.or(env)
        .or(beside_exe.filter(|dir| dir.is_dir()))
        .unwrap_or_else(|| bundled.to_path_buf())
}

/// Join `path` onto `base` and fold away `.` and `..` components without touching the filesystem
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    use std::path::Component;

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::PackageManager;

    #[derive(Clone)]
    struct AgentConfig;

    impl ProductConfig for AgentConfig {
        fn name(&self) -> &'static str {
            "create-agent-test"
        }
        fn display_name(&self) -> &'static str {
            "create-agent-test"
        }
        fn cli_description(&self) -> &'static str {
            "Create a test project."
        }
        fn default_target_dir(&self) -> &'static str {
            "agent-project"
        }
        fn template_dir_env(&self) -> &'static str {
            "CREATE_AGENT_TEST_TEMPLATES"
        }
        fn bundled_templates_dir(&self) -> &'static Path {
            Path::new("/bundled")
        }
        fn user_agent_env(&self) -> &'static str {
            "CREATE_AGENT_TEST_USER_AGENT"
        }
    }

    #[test]
    fn test_package_manager_read_from_product_user_agent_env() {
        std::env::set_var(AgentConfig.user_agent_env(), "pnpm/9.1.0 npm/? node/v20.11.0");
        let env = RunEnvironment::from_process(&AgentConfig, Some(PathBuf::from("/flag"))).unwrap();
        std::env::remove_var(AgentConfig.user_agent_env());

        assert_eq!(env.package_manager.manager, PackageManager::Other("pnpm".to_string()));
        assert_eq!(env.package_manager.version.as_deref(), Some("9.1.0"));
    }

    #[test]
    fn test_flag_wins_over_everything() {
        let root = resolve_templates_root(
            Some(PathBuf::from("/flag")),
            Some(PathBuf::from("/env")),
            None,
            Path::new("/bundled"),
        );
        assert_eq!(root, PathBuf::from("/flag"));
    }

    #[test]
    fn test_env_beats_bundled() {
        let root = resolve_templates_root(None, Some(PathBuf::from("/env")), None, Path::new("/bundled"));
        assert_eq!(root, PathBuf::from("/env"));
    }

    #[test]
    fn test_missing_exe_dir_falls_back_to_bundled() {
        let root = resolve_templates_root(
            None,
            None,
            Some(PathBuf::from("/definitely/not/here/templates")),
            Path::new("/bundled"),
        );
        assert_eq!(root, PathBuf::from("/bundled"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize() {
        let base = Path::new("/home/me");
        assert_eq!(absolutize(base, Path::new("my-app")), PathBuf::from("/home/me/my-app"));
        assert_eq!(absolutize(base, Path::new(".")), PathBuf::from("/home/me"));
        assert_eq!(absolutize(base, Path::new("../other")), PathBuf::from("/home/other"));
        assert_eq!(absolutize(base, Path::new("/abs/x")), PathBuf::from("/abs/x"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_target() {
        let env = RunEnvironment {
            cwd: PathBuf::from("/home/me"),
            package_manager: PackageManagerInfo::default(),
            templates_root: PathBuf::from("/t"),
        };
        assert_eq!(env.resolve("./a/b"), PathBuf::from("/home/me/a/b"));
    }
}
