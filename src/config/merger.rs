//! Layered merging of YAML configuration values.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences and scalars in the overlay replace the base value
//! - A null value in an overlay deletes the key from the base
//! - A layer that is null as a whole (an empty file) contributes nothing

use serde_yaml::{Mapping, Value};

/// Deep merge `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut merged = base_map.clone();

            for (key, value) in overlay_map {
                if value.is_null() {
                    merged.remove(key);
                    continue;
                }
                let next = match base_map.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }

            Value::Mapping(merged)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order; later layers take precedence.
pub fn merge_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .filter(|layer| !layer.is_null())
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_replaces_workspace_and_keeps_siblings() {
        let base = yaml(
            r#"
delivery:
  workspace:
    repo: /srv/ws
    cache: /srv/cache
"#,
        );
        let overlay = yaml(
            r#"
delivery:
  workspace:
    repo: /tmp/ws
"#,
        );

        let merged = deep_merge(&base, &overlay);

        assert_eq!(merged["delivery"]["workspace"]["repo"], "/tmp/ws");
        assert_eq!(merged["delivery"]["workspace"]["cache"], "/srv/cache");
    }

    #[test]
    fn null_in_overlay_deletes_key() {
        let base = yaml("delivery:\n  workspace:\n    repo: /srv/ws\n");
        let overlay = yaml("delivery:\n  workspace:\n    repo: null\n");

        let merged = deep_merge(&base, &overlay);

        assert!(merged["delivery"]["workspace"].get("repo").is_none());
    }

    #[test]
    fn sequences_are_replaced() {
        let base = yaml("tags: [a, b]");
        let overlay = yaml("tags: [c]");

        let merged = deep_merge(&base, &overlay);
        let tags = merged["tags"].as_sequence().unwrap();

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0], "c");
    }

    #[test]
    fn scalar_overlay_replaces_mapping() {
        let base = yaml("delivery:\n  workspace:\n    repo: /srv/ws\n");
        let overlay = yaml("delivery: off");

        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["delivery"], "off");
    }

    #[test]
    fn layers_apply_in_order() {
        let layers = vec![yaml("a: 1\nb: 2"), yaml("b: 3\nc: 4"), yaml("c: 5")];

        let merged = merge_configs(&layers);

        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 3);
        assert_eq!(merged["c"], 5);
    }

    #[test]
    fn empty_layer_is_ignored() {
        let layers = vec![yaml("delivery:\n  workspace:\n    repo: /srv/ws\n"), yaml("")];

        let merged = merge_configs(&layers);

        assert_eq!(merged["delivery"]["workspace"]["repo"], "/srv/ws");
    }

    #[test]
    fn no_layers_yields_empty_mapping() {
        let merged = merge_configs(&[]);
        assert!(merged.as_mapping().unwrap().is_empty());
    }
}
