//! Ordered step execution with abort on first failure.

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::StepseqError;
use crate::shell::{CommandOptions, ProcessRunner};
use crate::steps::{check_working_dir, Step, StepResult};

/// Exit code reported when a failed step has none of its own.
pub const FAILURE_SENTINEL: i32 = 1;

/// Progress events emitted while a sequence runs.
#[derive(Debug)]
pub enum SequenceProgress<'a> {
    /// A step is about to start.
    StepStarting {
        index: usize,
        total: usize,
        step: &'a Step,
        working_dir: &'a Path,
    },
    /// A step finished (successfully or not).
    StepFinished { result: &'a StepResult },
    /// The sequence stopped early; `remaining` steps will not run.
    Aborted { index: usize, remaining: usize },
}

/// Options for running a sequence.
#[derive(Debug, Clone, Default)]
pub struct SequenceOptions {
    /// Capture child output instead of letting it through to the terminal.
    pub capture_output: bool,

    /// Report each step without running it.
    pub dry_run: bool,
}

/// Result of running a sequence.
#[derive(Debug)]
pub struct SequenceResult {
    /// Results of the steps that were attempted, in order.
    pub steps: Vec<StepResult>,

    /// 1-based index of the step that failed, if any.
    pub failed_at: Option<usize>,

    /// Total duration.
    pub duration: Duration,
}

impl SequenceResult {
    /// Whether every step succeeded.
    pub fn success(&self) -> bool {
        self.failed_at.is_none()
    }

    /// The failing step's result.
    pub fn failed_step(&self) -> Option<&StepResult> {
        let index = self.failed_at?;
        self.steps.iter().find(|s| s.index == index)
    }

    /// The failure that ended the sequence, as an error value.
    pub fn failure(&self) -> Option<StepseqError> {
        self.failed_step().map(|step| StepseqError::StepFailed {
            index: step.index,
            name: step.name.clone(),
            message: step
                .error
                .clone()
                .unwrap_or_else(|| "unknown error".to_string()),
        })
    }

    /// Process exit status for the whole sequence.
    ///
    /// Zero on success, otherwise the failing step's non-zero exit code,
    /// or [`FAILURE_SENTINEL`] when it has none.
    pub fn exit_code(&self) -> i32 {
        match self.failed_step() {
            None => 0,
            Some(step) => match step.exit_code {
                Some(code) if code != 0 => code,
                _ => FAILURE_SENTINEL,
            },
        }
    }
}

/// Runs steps one at a time through a [`ProcessRunner`].
pub struct Sequencer<'a> {
    runner: &'a dyn ProcessRunner,
}

impl<'a> Sequencer<'a> {
    /// Create a sequencer backed by `runner`.
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self { runner }
    }

    /// Run `steps` in order from `ambient`.
    pub fn run(&self, steps: &[Step], ambient: &Path, options: &SequenceOptions) -> SequenceResult {
        self.run_with_progress(steps, ambient, options, |_| {})
    }

    /// Run `steps` in order from `ambient`, reporting progress.
    ///
    /// Step `n + 1` never starts before step `n` has terminated. The first
    /// failing step ends the sequence; later steps are not attempted.
    pub fn run_with_progress(
        &self,
        steps: &[Step],
        ambient: &Path,
        options: &SequenceOptions,
        mut on_progress: impl FnMut(SequenceProgress<'_>),
    ) -> SequenceResult {
        let start = Instant::now();
        let total = steps.len();
        let mut results = Vec::with_capacity(total);
        let mut failed_at = None;

        for (offset, step) in steps.iter().enumerate() {
            let index = offset + 1;
            let working_dir = step.effective_dir(ambient);
            debug!(
                "Step {} '{}' resolves to {}",
                index,
                step.name,
                working_dir.display()
            );

            on_progress(SequenceProgress::StepStarting {
                index,
                total,
                step,
                working_dir,
            });

            let result = if options.dry_run {
                StepResult::planned(index, step, working_dir.to_path_buf())
            } else {
                info!("Running step {}/{} '{}': {}", index, total, step.name, step.command);
                self.run_step(index, step, working_dir, options)
            };

            let success = result.success();
            on_progress(SequenceProgress::StepFinished { result: &result });
            results.push(result);

            if !success {
                let remaining = total - index;
                warn!(
                    "Step {} '{}' failed; skipping {} remaining step(s)",
                    index, step.name, remaining
                );
                on_progress(SequenceProgress::Aborted { index, remaining });
                failed_at = Some(index);
                break;
            }
        }

        SequenceResult {
            steps: results,
            failed_at,
            duration: start.elapsed(),
        }
    }

    fn run_step(
        &self,
        index: usize,
        step: &Step,
        working_dir: &Path,
        options: &SequenceOptions,
    ) -> StepResult {
        if step.has_dir_override() {
            if let Err(e) = check_working_dir(working_dir) {
                return StepResult::failed(index, step, working_dir.to_path_buf(), e.to_string());
            }
        }

        let command_options = CommandOptions {
            cwd: Some(working_dir.to_path_buf()),
            capture_stdout: options.capture_output,
            capture_stderr: options.capture_output,
            ..Default::default()
        };

        match self.runner.run(&step.command, &command_options) {
            Ok(output) => StepResult::from_command(index, step, working_dir.to_path_buf(), output),
            Err(e) => StepResult::failed(index, step, working_dir.to_path_buf(), e.to_string()),
        }
    }
}
