//! Plan command implementation.
//!
//! The `stepseq plan` command lists the steps in order together with the
//! directory each one would run in, without running anything.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::PlanArgs;
use crate::config::Config;
use crate::error::{Result, StepseqError};
use crate::steps::{functional_sequence, Step};
use crate::ui::UserInterface;
use crate::workspace::resolve_workspace;

use super::dispatcher::{Command, CommandResult};

/// The plan command implementation.
pub struct PlanCommand {
    ambient_dir: PathBuf,
    config: Config,
    args: PlanArgs,
}

#[derive(Debug, Serialize)]
struct PlannedStep {
    index: usize,
    name: String,
    command: String,
    working_dir: String,
    overridden: bool,
}

impl PlannedStep {
    fn new(index: usize, step: &Step, ambient: &Path) -> Self {
        Self {
            index,
            name: step.name.clone(),
            command: step.command.clone(),
            working_dir: step.effective_dir(ambient).display().to_string(),
            overridden: step.has_dir_override(),
        }
    }
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(ambient_dir: &Path, config: Config, args: PlanArgs) -> Self {
        Self {
            ambient_dir: ambient_dir.to_path_buf(),
            config,
            args,
        }
    }

    fn planned_steps(&self) -> Vec<PlannedStep> {
        let workspace = resolve_workspace(&self.config);
        functional_sequence(workspace.as_deref())
            .iter()
            .enumerate()
            .map(|(offset, step)| PlannedStep::new(offset + 1, step, &self.ambient_dir))
            .collect()
    }
}

impl Command for PlanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let planned = self.planned_steps();

        if self.args.json {
            let json = serde_json::to_string_pretty(&planned)
                .map_err(|e| StepseqError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Steps");
        for step in &planned {
            let marker = if step.overridden { "" } else { " (ambient)" };
            ui.message(&format!(
                "  {}. {:<12} {}",
                step.index, step.name, step.command
            ));
            ui.message(&format!("     in {}{}", step.working_dir, marker));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::CONTAINERS_COMMAND;
    use crate::ui::MockUI;

    fn config() -> Config {
        Config::from_yaml_str("delivery:\n  workspace:\n    repo: /srv/ws\n").unwrap()
    }

    #[test]
    fn lists_steps_with_directories() {
        let cmd = PlanCommand::new(Path::new("/home/me"), config(), PlanArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("1. build"));
        assert!(ui.has_message(CONTAINERS_COMMAND));
        assert!(ui.has_message("in /srv/ws"));
        assert!(ui.has_message("in /home/me (ambient)"));
    }

    #[test]
    fn json_plan_has_three_steps() {
        let cmd = PlanCommand::new(Path::new("/home/me"), config(), PlanArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        let steps = parsed.as_array().unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0]["working_dir"], "/srv/ws");
        assert_eq!(steps[1]["working_dir"], "/home/me");
        assert_eq!(steps[1]["overridden"], false);
        assert_eq!(steps[2]["name"], "functional");
    }

    #[test]
    fn plan_does_not_validate_workspace() {
        let cmd = PlanCommand::new(
            Path::new("/home/me"),
            Config::default(),
            PlanArgs { json: true },
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed[0]["working_dir"], "");
    }
}
