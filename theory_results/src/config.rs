// Caller-tunable annotation defaults.
//
// The per-shape selection defaults are fixed (see each result type's
// `DEFAULT_*` constants). What varies between analysis setups is the color
// used when none is given, the expected value of an editorial flag, and
// which notes of an n-tuplet get marked. Those live here, loadable from
// JSON so a front end can change them without recompiling. Missing fields
// fall back to the defaults.

use crate::error::{Result, ResultError};
use crate::ntuplet::MarkPlan;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Color used by `color_default` operations.
    pub default_color: String,
    /// Plan used when marking n-tuplet findings.
    pub default_mark_plan: MarkPlan,
    /// Value an editorial flag must hold to count as set.
    pub default_editorial_value: Value,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        AnnotationConfig {
            default_color: "red".to_string(),
            default_mark_plan: MarkPlan::default(),
            default_editorial_value: Value::Bool(true),
        }
    }
}

impl AnnotationConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        debug!(path = %path.display(), color = %config.default_color, "loaded annotation config");
        Ok(config)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let config: AnnotationConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.default_color.trim().is_empty() {
            return Err(ResultError::Config(
                "default_color must not be empty".into(),
            ));
        }
        if self.default_editorial_value.is_null() {
            return Err(ResultError::Config(
                "default_editorial_value must not be null".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnnotationConfig::default();
        assert_eq!(config.default_color, "red");
        assert_eq!(config.default_mark_plan, MarkPlan::default());
        assert_eq!(config.default_editorial_value, json!(true));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AnnotationConfig::from_json_str(r#"{"default_color": "blue"}"#).unwrap();
        assert_eq!(config.default_color, "blue");
        assert_eq!(config.default_mark_plan, MarkPlan::default());
    }

    #[test]
    fn test_mark_plan_from_json() {
        let config =
            AnnotationConfig::from_json_str(r#"{"default_mark_plan": {"0": [1], "2": [0, 2]}}"#)
                .unwrap();
        let pairs: Vec<_> = config.default_mark_plan.iter().collect();
        assert_eq!(pairs, vec![(0, 1), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_rejects_empty_color() {
        let err = AnnotationConfig::from_json_str(r#"{"default_color": "  "}"#).unwrap_err();
        assert!(matches!(err, ResultError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = AnnotationConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ResultError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{"default_color": "green", "default_editorial_value": "yes"}"#;
        file.write_all(json.as_bytes()).unwrap();
        let config = AnnotationConfig::load(file.path()).unwrap();
        assert_eq!(config.default_color, "green");
        assert_eq!(config.default_editorial_value, json!("yes"));
    }

    #[test]
    fn test_load_missing_file() {
        let missing = Path::new("/nonexistent/annotation.json");
        let err = AnnotationConfig::load(missing).unwrap_err();
        assert!(matches!(err, ResultError::Io(_)));
    }
}
