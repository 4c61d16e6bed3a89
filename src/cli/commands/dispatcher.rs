//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_config, parse_override, Config, ConfigSource};
use crate::error::{Result, StepseqError};
use crate::shell::ShellRunner;
use crate::ui::{OutputMode, UserInterface};

/// Exit code when no configuration could be found.
pub const CONFIG_NOT_FOUND_EXIT: i32 = 2;

/// Configuration key that sets the default output mode.
pub const OUTPUT_SETTING_KEY: &str = "settings.output";

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    ambient_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher.
    ///
    /// `project_root` is where configuration is discovered; `ambient_dir`
    /// is the directory steps without an override run in.
    pub fn new(project_root: PathBuf, ambient_dir: PathBuf) -> Self {
        Self {
            project_root,
            ambient_dir,
        }
    }

    /// Load configuration honoring `--config` and `--set`.
    pub fn load_config(&self, cli: &Cli) -> Result<Config> {
        let overrides = cli
            .overrides
            .iter()
            .map(|raw| parse_override(raw))
            .collect::<Result<Vec<_>>>()?;

        load_config(&self.project_root, cli.config.as_deref(), &overrides)
    }

    /// Dispatch and execute a command.
    ///
    /// Every command except `completions` needs configuration; a missing
    /// config is reported and mapped to [`CONFIG_NOT_FOUND_EXIT`].
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let needs_config = !matches!(cli.command, Some(Commands::Completions(_)));

        let config = if needs_config {
            match self.load_config(cli) {
                Ok(config) => config,
                Err(StepseqError::ConfigNotFound { path }) => {
                    ui.error(&format!(
                        "No configuration found at {}. Create it or pass --config.",
                        path.display()
                    ));
                    return Ok(CommandResult::failure(CONFIG_NOT_FOUND_EXIT));
                }
                Err(e) => return Err(e),
            }
        } else {
            Config::default()
        };

        if !cli.verbose && !cli.quiet {
            apply_output_setting(&config, ui);
        }

        match &cli.command {
            Some(Commands::Run(args)) => self.run(config, args.clone(), ui),
            None => self.run(config, RunArgs::default(), ui),
            Some(Commands::Plan(args)) => {
                let cmd = super::plan::PlanCommand::new(&self.ambient_dir, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }

    fn run(
        &self,
        config: Config,
        args: RunArgs,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let runner = ShellRunner;
        let cmd = super::run::RunCommand::new(&self.ambient_dir, config, args, &runner);
        cmd.execute(ui)
    }
}

fn apply_output_setting(config: &Config, ui: &mut dyn UserInterface) {
    let Some(raw) = config.get_str(OUTPUT_SETTING_KEY) else {
        return;
    };
    match raw.parse::<OutputMode>() {
        Ok(mode) => ui.set_output_mode(mode),
        Err(e) => ui.warning(&format!("Ignoring {}: {}", OUTPUT_SETTING_KEY, e)),
    }
}
