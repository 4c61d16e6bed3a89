//! Stepseq - sequential build-pipeline step runner.
//!
//! Stepseq runs a fixed, ordered list of shell commands (build, container
//! listing, functional tests), each in its own working directory, and
//! stops at the first failure. The workspace directory comes from the
//! `delivery.workspace.repo` configuration key.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration discovery, merging, and key lookup
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Ordered step execution
//! - [`shell`] - Process spawning
//! - [`steps`] - Step definitions and results
//! - [`ui`] - Terminal output
//! - [`workspace`] - Workspace path resolution
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::path::Path;
//! use stepseq::runner::{SequenceOptions, Sequencer};
//! use stepseq::shell::ScriptedRunner;
//! use stepseq::steps::functional_sequence;
//! use stepseq::workspace::{resolve_workspace, WORKSPACE_KEY};
//!
//! let ws = std::env::temp_dir();
//! let mut source = HashMap::new();
//! source.insert(WORKSPACE_KEY.to_string(), ws.display().to_string());
//!
//! let steps = functional_sequence(resolve_workspace(&source).as_deref());
//! let runner = ScriptedRunner::new();
//! let result = Sequencer::new(&runner).run(&steps, Path::new("."), &SequenceOptions::default());
//!
//! assert!(result.success());
//! assert_eq!(runner.calls().len(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;
pub mod workspace;

pub use error::{Result, StepseqError};
