//! Shell command execution.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult, ProcessRunner, ShellRunner};
pub use mock::{RecordedCall, ScriptedRunner};
pub use platform::{is_ci, shell_flag, shell_program};
