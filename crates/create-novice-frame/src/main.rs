//! create-novice-frame - Project scaffolding for @novice1/frame applications

use anyhow::Result;
use clap::{ArgAction, Parser};
use frame_scaffolder::{CreateArgs, ProductConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "CREATE_NOVICE_FRAME_LOG";

/// @novice1/frame product configuration
#[derive(Clone)]
pub struct NoviceFrameConfig;

impl ProductConfig for NoviceFrameConfig {
    fn name(&self) -> &'static str {
        "create-novice-frame"
    }

    fn display_name(&self) -> &'static str {
        "create-novice-frame"
    }

    fn cli_description(&self) -> &'static str {
        "Create a new @novice1/frame project in TypeScript."
    }

    fn default_target_dir(&self) -> &'static str {
        "novice-frame-project"
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_NOVICE_FRAME_TEMPLATES"
    }

    fn bundled_templates_dir(&self) -> &'static Path {
        Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates"))
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-novice-frame")]
#[command(about = "Create a new @novice1/frame project in TypeScript")]
#[command(version, disable_help_flag = true)]
pub struct Args {
    /// Project directory to create
    pub directory: Option<String>,

    /// Author of package
    #[arg(short, long)]
    pub author: Option<String>,

    /// Description of package
    #[arg(short, long)]
    pub description: Option<String>,

    /// Use a specific license
    #[arg(short, long)]
    pub license: Option<String>,

    /// Use a specific template
    #[arg(short, long)]
    pub template: Option<String>,

    /// Remove existing files in the target directory without asking
    #[arg(long)]
    pub overwrite: bool,

    /// Display help and exit
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir", hide = true)]
    pub template_dir: Option<PathBuf>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            directory: args.directory,
            author: args.author,
            description: args.description,
            license: args.license,
            template: args.template,
            overwrite: args.overwrite,
            help: args.help,
            template_dir: args.template_dir,
        }
    }
}

/// Diagnostics go to stderr so they never interleave with prompt rendering on stdout
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let args = Args::parse();
    let config = NoviceFrameConfig;

    let result = frame_scaffolder::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_aliases() {
        let args = Args::try_parse_from([
            "create-novice-frame",
            "my-app",
            "-a",
            "Jane",
            "-d",
            "An API",
            "-l",
            "MIT",
            "-t",
            "wide",
        ])
        .unwrap();
        let create: CreateArgs = args.into();

        assert_eq!(create.directory.as_deref(), Some("my-app"));
        assert_eq!(create.author.as_deref(), Some("Jane"));
        assert_eq!(create.description.as_deref(), Some("An API"));
        assert_eq!(create.license.as_deref(), Some("MIT"));
        assert_eq!(create.template.as_deref(), Some("wide"));
        assert!(!create.overwrite);
        assert!(!create.help);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "create-novice-frame",
            "--template",
            "not-a-template",
            "--overwrite",
            "--help",
        ])
        .unwrap();

        // Unknown template names are accepted here and resolved later
        assert_eq!(args.template.as_deref(), Some("not-a-template"));
        assert!(args.overwrite);
        assert!(args.help);
        assert_eq!(args.directory, None);
    }

    #[test]
    fn test_bundled_templates_dir_points_at_workspace() {
        let dir = NoviceFrameConfig.bundled_templates_dir();
        assert!(dir.ends_with("templates"));
    }
}
