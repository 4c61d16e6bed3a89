//! Workspace path resolution.

use crate::config::ConfigSource;

/// Configuration key holding the workspace (repository) path.
pub const WORKSPACE_KEY: &str = "delivery.workspace.repo";

/// Resolve the workspace directory from configuration.
///
/// The value is returned exactly as configured. A missing or non-string
/// value yields `None`; whether the path exists is only checked when a
/// step runs in it.
pub fn resolve_workspace(config: &dyn ConfigSource) -> Option<String> {
    config.get_str(WORKSPACE_KEY)
}
