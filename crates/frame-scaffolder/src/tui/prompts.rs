//! Charm-style CLI prompts using cliclack

use crate::args::{help_message, CreateArgs};
use crate::config::RunEnvironment;
use crate::product::ProductConfig;
use crate::prompt::{Choice, Prompted, Prompter};
use crate::runtime::Installer;
use crate::workflow::{self, Outcome};
use anyhow::Result;
use std::io;

/// [`Prompter`] backed by cliclack. Esc or Ctrl+C inside a prompt cancels it.
#[derive(Debug, Default)]
pub struct ClackPrompter;

fn cancellable<T>(result: io::Result<T>) -> Result<Prompted<T>> {
    match result {
        Ok(value) => Ok(Prompted::Answered(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Prompted::Cancelled),
        Err(e) => Err(e.into()),
    }
}

impl Prompter for ClackPrompter {
    fn text(&mut self, message: &str, default: &str) -> Result<Prompted<String>> {
        cancellable(
            cliclack::input(message)
                .placeholder(default)
                .default_input(default)
                .interact(),
        )
    }

    fn select<T: Clone + Eq>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<Prompted<T>> {
        let mut select = cliclack::select(message);
        for choice in choices {
            select = select.item(choice.value.clone(), &choice.label, "");
        }
        cancellable(select.interact())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    if args.help {
        println!("{}", help_message(config));
        return Ok(());
    }

    let env = RunEnvironment::from_process(config, args.template_dir.clone())?;

    cliclack::intro(config.display_name())?;

    // Steps 1-4: everything that can be answered, retried or cancelled
    let mut prompter = ClackPrompter;
    let request = match workflow::resolve_request(&mut prompter, config, &env, &args)? {
        Outcome::Completed(request) => request,
        Outcome::Cancelled => {
            cliclack::outro_cancel("Operation cancelled")?;
            return Ok(());
        }
    };

    // Step 5: Create project
    cliclack::log::step(format!("Scaffolding project in {}...", request.root.display()))?;
    let report = workflow::scaffold(&env, &request)?;
    cliclack::log::success(report.summary(&request.root))?;

    // Step 6: Install dependencies
    let installer = Installer::new(&env.package_manager, &request);
    cliclack::log::remark(format!("This will execute: {}", installer.command()))?;

    let spinner = cliclack::spinner();
    spinner.start("Installing dependencies...");
    if let Err(e) = installer.install().await {
        spinner.error("Dependency installation failed");
        return Err(e.into());
    }
    spinner.stop("Dependencies installed");

    // Step 7: Show next steps
    cliclack::outro(workflow::completion_message(&env, &request))?;

    Ok(())
}
