//! Config command implementation.
//!
//! The `stepseq config` command shows the resolved workspace and the
//! merged configuration it came from.

use serde::Serialize;

use crate::cli::args::ConfigArgs;
use crate::config::Config;
use crate::error::{Result, StepseqError};
use crate::ui::UserInterface;
use crate::workspace::{resolve_workspace, WORKSPACE_KEY};

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    config: Config,
    args: ConfigArgs,
}

#[derive(Serialize)]
struct ConfigView<'a> {
    workspace: Option<String>,
    config: &'a serde_yaml::Value,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(config: Config, args: ConfigArgs) -> Self {
        Self { config, args }
    }

    fn render(&self) -> Result<String> {
        let workspace = resolve_workspace(&self.config);

        if self.args.json {
            let view = ConfigView {
                workspace,
                config: self.config.root(),
            };
            return serde_json::to_string_pretty(&view).map_err(|e| StepseqError::Other(e.into()));
        }

        let yaml =
            serde_yaml::to_string(self.config.root()).map_err(|e| StepseqError::Other(e.into()))?;
        Ok(format!(
            "# {}: {}\n{}",
            WORKSPACE_KEY,
            workspace.as_deref().unwrap_or("(unset)"),
            yaml.trim_end()
        ))
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rendered = self.render()?;
        ui.message(&rendered);
        Ok(CommandResult::success())
    }
}
