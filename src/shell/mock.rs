//! Scripted process runner for testing.
//!
//! `ScriptedRunner` implements [`ProcessRunner`] without spawning
//! anything. Each command returns a configured exit status (zero unless
//! scripted otherwise) and every call is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use stepseq::shell::{CommandOptions, ProcessRunner, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new().with_exit("make clean all", 2);
//! let result = runner.run("make clean all", &CommandOptions::default()).unwrap();
//!
//! assert_eq!(result.exit_code, Some(2));
//! assert_eq!(runner.commands(), vec!["make clean all".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, StepseqError};

use super::command::{CommandOptions, CommandResult, ProcessRunner};

/// A call observed by [`ScriptedRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The command line.
    pub command: String,

    /// Working directory passed to the runner.
    pub cwd: Option<PathBuf>,
}

/// Process runner that returns scripted exit statuses.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    exits: HashMap<String, Option<i32>>,
    spawn_failures: HashSet<String>,
    output: HashMap<String, (String, String)>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    /// A runner where every command exits zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the exit code for `command`.
    pub fn with_exit(mut self, command: &str, code: i32) -> Self {
        self.exits.insert(command.to_string(), Some(code));
        self
    }

    /// Script `command` to be killed by a signal (no exit code).
    pub fn with_signal(mut self, command: &str) -> Self {
        self.exits.insert(command.to_string(), None);
        self
    }

    /// Script `command` to fail before a process starts.
    pub fn with_spawn_failure(mut self, command: &str) -> Self {
        self.spawn_failures.insert(command.to_string());
        self
    }

    /// Script captured stdout and stderr for `command`.
    pub fn with_output(mut self, command: &str, stdout: &str, stderr: &str) -> Self {
        self.output
            .insert(command.to_string(), (stdout.to_string(), stderr.to_string()));
        self
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Recorded command lines, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.command.clone()).collect()
    }

    /// How many times `command` ran.
    pub fn times_run(&self, command: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.command == command)
            .count()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, command: &str, options: &CommandOptions) -> Result<CommandResult> {
        self.calls.borrow_mut().push(RecordedCall {
            command: command.to_string(),
            cwd: options.cwd.clone(),
        });

        if self.spawn_failures.contains(command) {
            return Err(StepseqError::CommandFailed {
                command: command.to_string(),
                code: None,
            });
        }

        let (stdout, stderr) = self.output.get(command).cloned().unwrap_or_default();
        let duration = Duration::from_millis(1);

        match self.exits.get(command).copied().unwrap_or(Some(0)) {
            Some(0) => Ok(CommandResult::success(stdout, stderr, duration)),
            code => Ok(CommandResult::failure(code, stdout, stderr, duration)),
        }
    }
}
