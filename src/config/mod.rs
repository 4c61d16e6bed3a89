//! Configuration loading and lookup.
//!
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//! - Dotted-key lookup and command-line overrides in [`source`]
//!
//! # Example
//!
//! ```
//! use stepseq::config::{Config, ConfigSource};
//!
//! let config = Config::from_yaml_str("delivery:\n  workspace:\n    repo: /tmp/ws\n").unwrap();
//! assert_eq!(config.get_str("delivery.workspace.repo"), Some("/tmp/ws".to_string()));
//! ```
//!
//! # Configuration File Locations
//!
//! Layers are merged in this order:
//! 1. Project config (`.stepseq/config.yml`)
//! 2. Local overrides (`.stepseq/config.local.yml`)
//! 3. Command-line overrides (`--set key=value`)

pub mod loader;
pub mod merger;
pub mod source;

pub use loader::{load_config, load_config_value, load_merged_config, ConfigPaths};
pub use merger::{deep_merge, merge_configs};
pub use source::{lookup, overrides_to_value, parse_override, Config, ConfigSource};
