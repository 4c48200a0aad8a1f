//! Tree Configuration
//!
//! Settings that control how split candidates are enumerated.
use crate::errors::CartError;
use serde::{Deserialize, Serialize};

/// Order in which the distinct values of a column are tried as split
/// candidates.
///
/// Candidates with equal gain resolve to the last one tried, so the order
/// decides which of them becomes the split.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ValueOrder {
    /// Order of first occurrence in the rows being split.
    #[default]
    FirstSeen,
    /// Ascending, numbers before text.
    Sorted,
}

fn default_value_order() -> ValueOrder {
    ValueOrder::FirstSeen
}

/// Configuration for building a tree.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct TreeConfig {
    /// Enumeration order of candidate values.
    #[serde(default = "default_value_order")]
    pub value_order: ValueOrder,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            value_order: default_value_order(),
        }
    }
}

impl TreeConfig {
    /// Load a configuration from a json string, missing fields take their
    /// default.
    pub fn from_json(json_str: &str) -> Result<Self, CartError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| CartError::UnableToRead(e.to_string()))
    }

    /// Dump the configuration as a json string.
    pub fn json_dump(&self) -> Result<String, CartError> {
        serde_json::to_string(self).map_err(|e| CartError::UnableToWrite(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = TreeConfig::from_json("{}").unwrap();
        assert_eq!(cfg, TreeConfig::default());
        assert_eq!(cfg.value_order, ValueOrder::FirstSeen);
    }

    #[test]
    fn test_config_json() {
        let cfg = TreeConfig::from_json(r#"{"value_order": "Sorted"}"#).unwrap();
        assert_eq!(cfg.value_order, ValueOrder::Sorted);
        let dumped = cfg.json_dump().unwrap();
        assert_eq!(TreeConfig::from_json(&dumped).unwrap(), cfg);
        assert!(matches!(
            TreeConfig::from_json(r#"{"value_order": "Random"}"#),
            Err(CartError::UnableToRead(_))
        ));
    }
}
