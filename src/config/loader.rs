//! Configuration file discovery and loading.
//!
//! This module finds configuration files under a project root and loads
//! them in priority order before merging.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::source::{overrides_to_value, Config};
use crate::error::{Result, StepseqError};

/// Directory under the project root that holds configuration.
pub const CONFIG_DIR: &str = ".stepseq";

/// Project configuration file name.
pub const CONFIG_FILE: &str = "config.yml";

/// Local override file name (not meant to be committed).
pub const LOCAL_CONFIG_FILE: &str = "config.local.yml";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .stepseq/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .stepseq/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(Self::project_path(project_root)),
            project_local: existing(project_root.join(CONFIG_DIR).join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Where the project config is expected to live.
    pub fn project_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Load a config file as a raw YAML value.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the content is not valid YAML.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StepseqError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StepseqError::Io(e)
        }
    })?;

    debug!("Loaded config layer from {}", path.display());

    serde_yaml::from_str(&content).map_err(|e| StepseqError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project config and its local overrides.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
pub fn load_merged_config(project_root: &Path) -> Result<Config> {
    load_config(project_root, None, &[])
}

/// Load configuration with optional file override and command-line overrides.
///
/// If `config_override` is provided, only that file is read. Otherwise the
/// project config and local overrides are merged. Command-line overrides
/// are applied last in both cases.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
    overrides: &[(String, String)],
) -> Result<Config> {
    let mut layers = match config_override {
        Some(path) => vec![load_config_value(path)?],
        None => {
            let paths = ConfigPaths::discover(project_root);
            if !paths.has_project_config() {
                return Err(StepseqError::ConfigNotFound {
                    path: ConfigPaths::project_path(project_root),
                });
            }
            paths
                .all_existing()
                .into_iter()
                .map(|path| load_config_value(path))
                .collect::<Result<Vec<_>>>()?
        }
    };

    if !overrides.is_empty() {
        debug!("Applying {} command-line override(s)", overrides.len());
        layers.push(overrides_to_value(overrides));
    }

    Ok(Config::new(merge_configs(&layers)))
}
