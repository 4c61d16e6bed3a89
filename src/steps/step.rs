//! The step value object and working-directory resolution.

use std::path::{Path, PathBuf};

use crate::error::{Result, StepseqError};

/// One external command invocation, optionally scoped to a directory.
///
/// Steps are immutable once built. When `working_dir` is `None` the
/// command runs in the caller's current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Short identifier used in output and logs.
    pub name: String,

    /// Shell command line.
    pub command: String,

    /// Working directory override.
    pub working_dir: Option<PathBuf>,
}

impl Step {
    /// A step that runs in the caller's working directory.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            working_dir: None,
        }
    }

    /// A step that runs in `dir`.
    pub fn in_dir(
        name: impl Into<String>,
        command: impl Into<String>,
        dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            working_dir: Some(dir.into()),
        }
    }

    /// The directory this step runs in: its override, else `ambient`.
    pub fn effective_dir<'a>(&'a self, ambient: &'a Path) -> &'a Path {
        self.working_dir.as_deref().unwrap_or(ambient)
    }

    /// Whether this step overrides the working directory.
    pub fn has_dir_override(&self) -> bool {
        self.working_dir.is_some()
    }
}

/// Ensure `path` names an existing directory.
pub fn check_working_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || !path.is_dir() {
        return Err(StepseqError::InvalidWorkingDirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
