//! Package manager detection from the invoking user agent

use std::fmt;

/// Package manager that launched the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Other(String),
}

impl PackageManager {
    pub fn name(&self) -> &str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Other(name) => name,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Package manager name and version, derived once at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerInfo {
    pub manager: PackageManager,
    pub version: Option<String>,
}

impl Default for PackageManagerInfo {
    fn default() -> Self {
        Self {
            manager: PackageManager::Npm,
            version: None,
        }
    }
}

impl PackageManagerInfo {
    /// Parse a `name/version ...` user agent such as `yarn/1.22.19 npm/? node/v20.11.0`.
    /// Missing or malformed input falls back to npm.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let Some(spec) = user_agent.and_then(|ua| ua.split(' ').next()) else {
            return Self::default();
        };

        let mut parts = spec.split('/');
        let manager = match parts.next().unwrap_or_default() {
            "" => return Self::default(),
            "npm" => PackageManager::Npm,
            "yarn" => PackageManager::Yarn,
            other => PackageManager::Other(other.to_string()),
        };
        let version = parts.next().filter(|v| !v.is_empty()).map(str::to_string);

        Self { manager, version }
    }

    /// Command prefix that adds packages, e.g. `yarn add` or `pnpm i`
    pub fn add_command(&self) -> String {
        match &self.manager {
            PackageManager::Yarn => "yarn add".to_string(),
            other => format!("{} i", other),
        }
    }

    /// Command that starts the generated project's dev script
    pub fn run_dev_command(&self) -> String {
        match &self.manager {
            PackageManager::Yarn => "yarn dev".to_string(),
            other => format!("{} run dev", other),
        }
    }
}
