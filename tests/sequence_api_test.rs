//! Integration tests for running the functional sequence through the
//! public API with a scripted process runner.

use std::collections::HashMap;
use std::path::Path;

use stepseq::runner::{SequenceOptions, Sequencer, FAILURE_SENTINEL};
use stepseq::shell::ScriptedRunner;
use stepseq::steps::{
    functional_sequence, StepStatus, BUILD_COMMAND, CONTAINERS_COMMAND, FUNCTIONAL_COMMAND,
};
use stepseq::workspace::{resolve_workspace, WORKSPACE_KEY};
use tempfile::TempDir;

fn source_for(workspace: &Path) -> HashMap<String, String> {
    let mut source = HashMap::new();
    source.insert(WORKSPACE_KEY.to_string(), workspace.display().to_string());
    source
}

#[test]
fn all_steps_succeed_in_order() {
    let ws = TempDir::new().unwrap();
    let ambient = TempDir::new().unwrap();
    let steps = functional_sequence(resolve_workspace(&source_for(ws.path())).as_deref());
    let runner = ScriptedRunner::new();

    let result = Sequencer::new(&runner).run(&steps, ambient.path(), &SequenceOptions::default());

    assert!(result.success());
    assert_eq!(result.exit_code(), 0);
    assert_eq!(
        runner.commands(),
        vec![BUILD_COMMAND, CONTAINERS_COMMAND, FUNCTIONAL_COMMAND]
    );
    assert!(result
        .steps
        .iter()
        .all(|s| s.status == StepStatus::Completed));
}

#[test]
fn build_failure_aborts_before_containers() {
    let ws = TempDir::new().unwrap();
    let steps = functional_sequence(resolve_workspace(&source_for(ws.path())).as_deref());
    let runner = ScriptedRunner::new().with_exit(BUILD_COMMAND, 1);

    let result = Sequencer::new(&runner).run(&steps, ws.path(), &SequenceOptions::default());

    assert_eq!(result.failed_at, Some(1));
    assert_eq!(result.exit_code(), 1);
    assert_eq!(runner.times_run(CONTAINERS_COMMAND), 0);
    assert_eq!(runner.times_run(FUNCTIONAL_COMMAND), 0);
}

#[test]
fn missing_workspace_key_fails_first_step() {
    let ambient = TempDir::new().unwrap();
    let source: HashMap<String, String> = HashMap::new();
    let steps = functional_sequence(resolve_workspace(&source).as_deref());
    let runner = ScriptedRunner::new();

    let result = Sequencer::new(&runner).run(&steps, ambient.path(), &SequenceOptions::default());

    assert_eq!(result.failed_at, Some(1));
    assert_eq!(result.exit_code(), FAILURE_SENTINEL);
    assert!(runner.calls().is_empty());
    assert_eq!(result.steps.len(), 1);
}

#[test]
fn containers_step_runs_in_ambient_directory() {
    let ws = TempDir::new().unwrap();
    let ambient = TempDir::new().unwrap();
    let steps = functional_sequence(resolve_workspace(&source_for(ws.path())).as_deref());
    let runner = ScriptedRunner::new();

    let result = Sequencer::new(&runner).run(&steps, ambient.path(), &SequenceOptions::default());

    let calls = runner.calls();
    assert_eq!(calls[0].cwd.as_deref(), Some(ws.path()));
    assert_eq!(calls[1].command, CONTAINERS_COMMAND);
    assert_eq!(calls[1].cwd.as_deref(), Some(ambient.path()));
    assert_eq!(result.steps[1].working_dir, ambient.path());
    assert_eq!(calls[2].cwd.as_deref(), Some(ws.path()));
}

#[test]
fn functional_failure_exit_code_propagates() {
    let ws = TempDir::new().unwrap();
    let steps = functional_sequence(resolve_workspace(&source_for(ws.path())).as_deref());
    let runner = ScriptedRunner::new().with_exit(FUNCTIONAL_COMMAND, 2);

    let result = Sequencer::new(&runner).run(&steps, ws.path(), &SequenceOptions::default());

    assert_eq!(result.failed_at, Some(3));
    assert_eq!(result.exit_code(), 2);
    assert_eq!(runner.calls().len(), 3);
}

#[test]
fn rerunning_issues_the_same_commands() {
    let ws = TempDir::new().unwrap();
    let steps = functional_sequence(resolve_workspace(&source_for(ws.path())).as_deref());
    let runner = ScriptedRunner::new();
    let sequencer = Sequencer::new(&runner);

    let first = sequencer.run(&steps, ws.path(), &SequenceOptions::default());
    let second = sequencer.run(&steps, ws.path(), &SequenceOptions::default());

    assert_eq!(first.exit_code(), second.exit_code());
    let commands = runner.commands();
    assert_eq!(commands.len(), 6);
    assert_eq!(commands[..3], commands[3..]);
}

#[cfg(unix)]
#[test]
fn ambient_step_runs_in_given_directory_not_process_cwd() {
    use stepseq::shell::ShellRunner;
    use stepseq::steps::Step;

    let ambient = TempDir::new().unwrap();
    let steps = vec![Step::new("touch", "touch stepseq_ambient_marker")];
    let options = SequenceOptions {
        capture_output: true,
        ..Default::default()
    };

    let result = Sequencer::new(&ShellRunner).run(&steps, ambient.path(), &options);

    assert!(result.success());
    assert_eq!(result.steps[0].working_dir, ambient.path());
    assert!(ambient.path().join("stepseq_ambient_marker").is_file());
    assert!(!std::env::current_dir()
        .unwrap()
        .join("stepseq_ambient_marker")
        .exists());
}
