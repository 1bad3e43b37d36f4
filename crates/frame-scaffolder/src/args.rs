//! Parsed command-line input and the usage text

use crate::product::ProductConfig;
use crate::templates::registry::TEMPLATES;
use std::path::PathBuf;

/// Arguments for the create flow, before any prompting.
///
/// Values are taken as given; the template name in particular is only checked
/// against the registry later, so a typo falls back to the picker.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Positional target directory
    pub directory: Option<String>,

    pub author: Option<String>,

    pub description: Option<String>,

    pub license: Option<String>,

    /// Template name to use
    pub template: Option<String>,

    /// Wipe a non-empty target without asking
    pub overwrite: bool,

    /// Print usage and exit
    pub help: bool,

    /// Local directory to use for templates instead of the bundled ones
    pub template_dir: Option<PathBuf>,
}

impl CreateArgs {
    /// Formatted target directory; blank input counts as absent
    pub fn target_dir(&self) -> Option<String> {
        self.directory
            .as_deref()
            .map(format_target_dir)
            .filter(|dir| !dir.is_empty())
    }
}

/// Trim whitespace and trailing slashes
pub fn format_target_dir(dir: &str) -> String {
    dir.trim().trim_end_matches('/').to_string()
}

/// Static usage text, with each template name in its display colour
pub fn help_message<C: ProductConfig>(config: &C) -> String {
    let templates = TEMPLATES
        .iter()
        .map(|t| format!("  {}", t.tint.paint(t.id.as_str())))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "  Usage: {name} [OPTION]... [DIRECTORY]

  {description}
  With no arguments, start the CLI in interactive mode.

  Options:
    -a, --author NAME          author of package
    -d, --description TEXT     description of package
    -l, --license NAME         use a specific license
    -t, --template NAME        use a specific template
        --overwrite            remove existing files in DIRECTORY without asking
    -h, --help                 display this help and exit
    -V, --version              output version information and exit

  Available templates:
{templates}",
        name = config.name(),
        description = config.cli_description(),
        templates = templates,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[derive(Clone)]
    struct TestConfig;

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "create-test"
        }
        fn display_name(&self) -> &'static str {
            "Test"
        }
        fn cli_description(&self) -> &'static str {
            "Create a test project."
        }
        fn default_target_dir(&self) -> &'static str {
            "test-project"
        }
        fn template_dir_env(&self) -> &'static str {
            "TEST_TEMPLATES"
        }
        fn bundled_templates_dir(&self) -> &'static Path {
            Path::new("templates")
        }
    }

    #[test]
    fn test_format_target_dir() {
        assert_eq!(format_target_dir("  my-app//  "), "my-app");
        assert_eq!(format_target_dir("a/b/"), "a/b");
        assert_eq!(format_target_dir("."), ".");
    }

    #[test]
    fn test_blank_directory_is_absent() {
        let args = CreateArgs {
            directory: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(args.target_dir(), None);

        let args = CreateArgs {
            directory: Some("///".to_string()),
            ..Default::default()
        };
        assert_eq!(args.target_dir(), None);
    }

    #[test]
    fn test_help_lists_every_template() {
        colored::control::set_override(false);
        let help = help_message(&TestConfig);
        assert!(help.contains("Usage: create-test [OPTION]... [DIRECTORY]"));
        for t in &TEMPLATES {
            assert!(help.contains(&format!("  {}", t.id.as_str())));
        }
        assert!(help.contains("--overwrite"));
    }
}
