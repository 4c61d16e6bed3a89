//! Run command implementation.
//!
//! The `stepseq run` command executes the functional sequence.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::error::{Result, StepseqError};
use crate::runner::{SequenceOptions, SequenceProgress, Sequencer};
use crate::shell::ProcessRunner;
use crate::steps::{functional_sequence, StepStatus};
use crate::ui::{format_duration, UserInterface};
use crate::workspace::{resolve_workspace, WORKSPACE_KEY};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand<'a> {
    ambient_dir: PathBuf,
    config: Config,
    args: RunArgs,
    runner: &'a dyn ProcessRunner,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(
        ambient_dir: &Path,
        config: Config,
        args: RunArgs,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            ambient_dir: ambient_dir.to_path_buf(),
            config,
            args,
            runner,
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = resolve_workspace(&self.config);
        let steps = functional_sequence(workspace.as_deref());

        match &workspace {
            Some(path) => ui.show_header(&format!("Functional sequence in {}", path)),
            None => {
                ui.show_header("Functional sequence");
                ui.warning(&format!("No workspace configured at '{}'", WORKSPACE_KEY));
            }
        }

        if self.args.dry_run {
            ui.message("Running in dry-run mode - no commands will be executed");
        }

        let mode = ui.output_mode();
        let options = SequenceOptions {
            capture_output: !mode.streams_command_output(),
            dry_run: self.args.dry_run,
        };

        let sequencer = Sequencer::new(self.runner);
        let result = sequencer.run_with_progress(
            &steps,
            &self.ambient_dir,
            &options,
            |progress| match progress {
                SequenceProgress::StepStarting {
                    index,
                    total,
                    step,
                    working_dir,
                } => {
                    if mode.shows_progress() && !options.dry_run {
                        ui.show_progress(index, total);
                        ui.message(&format!(
                            "Running {}: {} (in {})",
                            step.name,
                            step.command,
                            working_dir.display()
                        ));
                    }
                }
                SequenceProgress::StepFinished { result } => match result.status {
                    StepStatus::Planned => ui.message(&result.summary_line()),
                    StepStatus::Completed => {
                        if mode.shows_progress() {
                            ui.success(&format!(
                                "{} ({})",
                                result.name,
                                format_duration(result.duration)
                            ));
                        }
                    }
                    StepStatus::Failed => {
                        let error = result.error.as_deref().unwrap_or("unknown error");
                        ui.error(&format!("{} failed: {}", result.name, error));
                        let output = result.combined_output();
                        if !output.is_empty() || result.exit_code.is_some() {
                            ui.show_error_block(&result.command, &output);
                        }
                    }
                },
                SequenceProgress::Aborted { remaining, .. } => {
                    if remaining > 0 {
                        let label = if remaining == 1 { "step" } else { "steps" };
                        ui.warning(&format!("Skipped {} remaining {}", remaining, label));
                    }
                }
            },
        );

        if let Some(StepseqError::StepFailed { index, name, .. }) = result.failure() {
            ui.error(&format!("Sequence failed at step {} ({})", index, name));
            return Ok(CommandResult::failure(result.exit_code()));
        }

        let count = result.steps.len();
        let label = if count == 1 { "step" } else { "steps" };
        let verb = if self.args.dry_run { "planned" } else { "run" };
        ui.success(&format!(
            "Sequence complete! ({} {} {}, {})",
            count,
            label,
            verb,
            format_duration(result.duration)
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;
    use crate::steps::{BUILD_COMMAND, CONTAINERS_COMMAND, FUNCTIONAL_COMMAND};
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    fn config_for(workspace: &Path) -> Config {
        Config::from_yaml_str(&format!(
            "delivery:\n  workspace:\n    repo: '{}'\n",
            workspace.display()
        ))
        .unwrap()
    }

    #[test]
    fn runs_all_steps_and_reports_success() {
        let ws = TempDir::new().unwrap();
        let runner = ScriptedRunner::new();
        let cmd = RunCommand::new(ws.path(), config_for(ws.path()), RunArgs::default(), &runner);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(
            runner.commands(),
            vec![BUILD_COMMAND, CONTAINERS_COMMAND, FUNCTIONAL_COMMAND]
        );
        assert!(ui.has_success("Sequence complete! (3 steps run"));
        assert_eq!(ui.progress(), [(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn failing_build_returns_its_exit_code() {
        let ws = TempDir::new().unwrap();
        let runner = ScriptedRunner::new()
            .with_exit(BUILD_COMMAND, 2)
            .with_output(BUILD_COMMAND, "", "make: *** [all] Error 2\n");
        let cmd = RunCommand::new(ws.path(), config_for(ws.path()), RunArgs::default(), &runner);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert_eq!(runner.commands(), vec![BUILD_COMMAND]);
        assert!(ui.has_error("Sequence failed at step 1 (build)"));
        assert!(ui.has_warning("Skipped 2 remaining steps"));
        assert_eq!(ui.error_blocks()[0].1, "make: *** [all] Error 2\n");
    }

    #[test]
    fn missing_workspace_warns_and_fails_first_step() {
        let ambient = TempDir::new().unwrap();
        let runner = ScriptedRunner::new();
        let cmd = RunCommand::new(
            ambient.path(),
            Config::default(),
            RunArgs::default(),
            &runner,
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(runner.calls().is_empty());
        assert!(ui.has_warning("No workspace configured"));
        assert!(ui.has_error("Invalid working directory"));
        assert!(ui.error_blocks().is_empty());
    }

    #[test]
    fn dry_run_plans_without_running() {
        let ws = TempDir::new().unwrap();
        let runner = ScriptedRunner::new();
        let args = RunArgs { dry_run: true };
        let cmd = RunCommand::new(ws.path(), config_for(ws.path()), args, &runner);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(runner.calls().is_empty());
        assert!(ui.has_message("dry-run mode"));
        assert!(ui.has_message(FUNCTIONAL_COMMAND));
        assert!(ui.has_success("3 steps planned"));
    }

    #[test]
    fn quiet_mode_hides_per_step_progress() {
        let ws = TempDir::new().unwrap();
        let runner = ScriptedRunner::new();
        let cmd = RunCommand::new(ws.path(), config_for(ws.path()), RunArgs::default(), &runner);
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.progress().is_empty());
        assert_eq!(ui.successes().len(), 1);
    }
}
