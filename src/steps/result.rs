//! Per-step execution results.

use std::path::PathBuf;
use std::time::Duration;

use crate::shell::CommandResult;
use crate::ui::format_duration;

use super::step::Step;

/// Outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step was only planned (dry run).
    Planned,

    /// Step exited with status zero.
    Completed,

    /// Step could not run or exited non-zero.
    Failed,
}

impl StepStatus {
    /// Get a display character for this status.
    pub fn display_char(&self) -> char {
        match self {
            StepStatus::Planned => '○',
            StepStatus::Completed => '✓',
            StepStatus::Failed => '✗',
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Planned => "planned",
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Result of executing a step.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// 1-based position in the sequence.
    pub index: usize,

    /// Step name.
    pub name: String,

    /// Command line that was (or would be) run.
    pub command: String,

    /// Effective working directory.
    pub working_dir: PathBuf,

    /// Exit code, when the process ran and was not killed by a signal.
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Captured standard output (empty when streamed).
    pub stdout: String,

    /// Captured standard error (empty when streamed).
    pub stderr: String,

    /// Error message (if failed).
    pub error: Option<String>,

    /// Final status.
    pub status: StepStatus,
}

impl StepResult {
    fn base(index: usize, step: &Step, working_dir: PathBuf, status: StepStatus) -> Self {
        Self {
            index,
            name: step.name.clone(),
            command: step.command.clone(),
            working_dir,
            exit_code: None,
            duration: Duration::ZERO,
            stdout: String::new(),
            stderr: String::new(),
            error: None,
            status,
        }
    }

    /// A step that was resolved but not run.
    pub fn planned(index: usize, step: &Step, working_dir: PathBuf) -> Self {
        Self::base(index, step, working_dir, StepStatus::Planned)
    }

    /// Build a result from a finished process.
    pub fn from_command(
        index: usize,
        step: &Step,
        working_dir: PathBuf,
        output: CommandResult,
    ) -> Self {
        let status = if output.success {
            StepStatus::Completed
        } else {
            StepStatus::Failed
        };
        let error = (!output.success).then(|| match output.exit_code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        });

        Self {
            exit_code: output.exit_code,
            duration: output.duration,
            stdout: output.stdout,
            stderr: output.stderr,
            error,
            ..Self::base(index, step, working_dir, status)
        }
    }

    /// A step that failed before or while spawning its process.
    pub fn failed(index: usize, step: &Step, working_dir: PathBuf, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::base(index, step, working_dir, StepStatus::Failed)
        }
    }

    /// Whether the step succeeded (planned steps count as successful).
    pub fn success(&self) -> bool {
        self.status != StepStatus::Failed
    }

    /// Captured output, stdout followed by stderr.
    pub fn combined_output(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (true, _) => self.stderr.clone(),
            (false, true) => self.stdout.clone(),
            (false, false) => format!("{}{}", self.stdout, self.stderr),
        }
    }

    /// Generate a summary line for display.
    pub fn summary_line(&self) -> String {
        let mark = self.status.display_char();
        match self.status {
            StepStatus::Planned => format!(
                "{} {} `{}` in {}",
                mark,
                self.name,
                self.command,
                self.working_dir.display()
            ),
            StepStatus::Completed => {
                format!("{} {} ({})", mark, self.name, format_duration(self.duration))
            }
            StepStatus::Failed => {
                let error = self.error.as_deref().unwrap_or("unknown error");
                format!("{} {} - {}", mark, self.name, error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step() -> Step {
        Step::in_dir("build", "make clean all", "/tmp/ws")
    }

    #[test]
    fn from_command_success() {
        let output = CommandResult::success(
            "ok\n".to_string(),
            String::new(),
            Duration::from_millis(20),
        );
        let result = StepResult::from_command(1, &step(), "/tmp/ws".into(), output);

        assert!(result.success());
        assert_eq!(result.status, StepStatus::Completed);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.error.is_none());
    }

    #[test]
    fn from_command_failure_records_code() {
        let output = CommandResult::failure(
            Some(2),
            String::new(),
            "make: *** [all] Error 2\n".to_string(),
            Duration::from_millis(5),
        );
        let result = StepResult::from_command(1, &step(), "/tmp/ws".into(), output);

        assert!(!result.success());
        assert_eq!(result.exit_code, Some(2));
        assert_eq!(result.error.as_deref(), Some("exited with status 2"));
    }

    #[test]
    fn from_command_signal_has_no_code() {
        let output = CommandResult::failure(None, String::new(), String::new(), Duration::ZERO);
        let result = StepResult::from_command(3, &step(), "/tmp/ws".into(), output);

        assert_eq!(result.exit_code, None);
        assert_eq!(result.error.as_deref(), Some("terminated by signal"));
    }

    #[test]
    fn planned_counts_as_success() {
        let result = StepResult::planned(1, &step(), "/tmp/ws".into());
        assert!(result.success());
        assert!(result.summary_line().contains("make clean all"));
    }

    #[test]
    fn combined_output_joins_streams() {
        let mut result = StepResult::planned(1, &step(), "/tmp/ws".into());
        result.stdout = "out\n".into();
        result.stderr = "err\n".into();
        assert_eq!(result.combined_output(), "out\nerr\n");

        result.stdout.clear();
        assert_eq!(result.combined_output(), "err\n");
    }

    #[test]
    fn summary_line_for_failure_includes_error() {
        let result = StepResult::failed(
            1,
            &step(),
            "/tmp/ws".into(),
            "Invalid working directory: '/tmp/ws'".to_string(),
        );
        let line = result.summary_line();
        assert!(line.contains('✗'));
        assert!(line.contains("Invalid working directory"));
    }

    #[test]
    fn status_display() {
        assert_eq!(StepStatus::Completed.to_string(), "completed");
        assert_eq!(StepStatus::Failed.to_string(), "failed");
        assert_eq!(StepStatus::Planned.to_string(), "planned");
    }
}
