//! Read-only key lookup over loaded configuration.
//!
//! Keys are dotted paths (`delivery.workspace.repo`). Only string leaves
//! are returned; any other node type reads as absent.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

use crate::error::{Result, StepseqError};

/// A read-only, string-valued configuration lookup.
///
/// Implemented by [`Config`] for loaded files and by `HashMap<String, String>`
/// so callers can substitute a fixed set of values.
pub trait ConfigSource {
    /// Look up the string value at a dotted key.
    fn get_str(&self, key: &str) -> Option<String>;
}

/// Configuration tree loaded and merged from YAML layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root: Value,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Value::Mapping(Mapping::new()))
    }
}

impl Config {
    /// Wrap a merged YAML value.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse configuration from YAML (or JSON) text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let root: Value =
            serde_yaml::from_str(content).map_err(|e| StepseqError::ConfigParseError {
                path: "<inline>".into(),
                message: e.to_string(),
            })?;
        Ok(Self::new(root))
    }

    /// The merged YAML tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up the raw node at a dotted key.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        lookup(&self.root, key)
    }
}

impl ConfigSource for Config {
    fn get_str(&self, key: &str) -> Option<String> {
        match self.lookup(key)? {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Walk a dotted key through nested mappings.
pub fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return None;
    }
    key.split('.').try_fold(root, |node, segment| node.get(segment))
}

/// Parse a `dotted.key=value` command-line override.
pub fn parse_override(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| StepseqError::ConfigValidationError {
            message: format!("Override '{}' must have the form KEY=VALUE", raw),
        })?;

    let key = key.trim();
    if key.is_empty() || key.split('.').any(|segment| segment.is_empty()) {
        return Err(StepseqError::ConfigValidationError {
            message: format!("Override key '{}' is not a valid dotted path", key),
        });
    }

    Ok((key.to_string(), value.to_string()))
}

/// Build a YAML layer from parsed overrides, nesting each dotted key.
pub fn overrides_to_value(overrides: &[(String, String)]) -> Value {
    let mut root = Mapping::new();

    for (key, value) in overrides {
        let segments: Vec<&str> = key.split('.').collect();
        insert_path(&mut root, &segments, Value::String(value.clone()));
    }

    Value::Mapping(root)
}

fn insert_path(map: &mut Mapping, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    let key = Value::String((*first).to_string());

    if rest.is_empty() {
        map.insert(key, value);
        return;
    }

    let child = map
        .entry(key)
        .or_insert_with(|| Value::Mapping(Mapping::new()));
    if !child.is_mapping() {
        *child = Value::Mapping(Mapping::new());
    }
    if let Value::Mapping(child_map) = child {
        insert_path(child_map, rest, value);
    }
}
