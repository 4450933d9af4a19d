//! Configuration model for an encode run.
//!
//! An [`EncodeConfig`] wraps the JSON object a user authored, without
//! reshaping it: sections and options keep their authored order (the JSON
//! map type preserves insertion order), unset options stay absent, and no
//! defaults are filled in. The compiler walks this structure as-is, which
//! is what makes compilation deterministic.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

/// Top-level keys that are consumed directly rather than dispatched as
/// sections.
pub const RESERVED_KEYS: [&str; 2] = ["source", "output_file"];

/// Short JSON shape name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads and parses a JSON document from disk.
pub(crate) fn read_json_file(path: &Path) -> CoreResult<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// A user-authored encoding configuration.
///
/// Construction does not validate against the schema; run the document
/// through [`SchemaValidator`](crate::schema::SchemaValidator) first when
/// validation is wanted. The compiler reports its own located errors
/// (missing fields, unknown sections) when handed unvalidated input.
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    root: Map<String, Value>,
}

impl EncodeConfig {
    /// Wraps an in-memory JSON value.
    ///
    /// The value must be a JSON object; anything else cannot hold the
    /// required `source`/`output_file` fields.
    pub fn from_value(value: Value) -> CoreResult<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(CoreError::Validation {
                message: format!(
                    "configuration root must be an object, got {}",
                    json_type_name(&other)
                ),
                path: String::new(),
            }),
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        log::debug!("Loading configuration from {}", path.display());
        Self::from_value(read_json_file(path)?)
    }

    /// The input media path.
    pub fn source(&self) -> CoreResult<&str> {
        self.required_str("source")
    }

    /// The output media path.
    pub fn output_file(&self) -> CoreResult<&str> {
        self.required_str("output_file")
    }

    /// Iterates the option sections in authored order, skipping the
    /// reserved `source`/`output_file` keys.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Read-only view of the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    fn required_str(&self, field: &'static str) -> CoreResult<&str> {
        match self.root.get(field) {
            None => Err(CoreError::MissingField(field)),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(CoreError::Format {
                option: field.to_string(),
                reason: format!("expected a string, got {}", json_type_name(other)),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn wraps_object_roots() {
        let config = EncodeConfig::from_value(json!({
            "source": "in.mkv",
            "output_file": "out.mkv"
        }))
        .unwrap();
        assert_eq!(config.source().unwrap(), "in.mkv");
        assert_eq!(config.output_file().unwrap(), "out.mkv");
    }

    #[test]
    fn rejects_non_object_roots() {
        let err = EncodeConfig::from_value(json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));
    }

    #[test]
    fn missing_required_fields_are_reported_by_name() {
        let config = EncodeConfig::from_value(json!({"output_file": "out.mkv"})).unwrap();
        match config.source().unwrap_err() {
            CoreError::MissingField(field) => assert_eq!(field, "source"),
            other => panic!("expected missing field, got {:?}", other),
        }

        let config = EncodeConfig::from_value(json!({"source": "in.mkv"})).unwrap();
        assert!(matches!(
            config.output_file().unwrap_err(),
            CoreError::MissingField("output_file")
        ));
    }

    #[test]
    fn sections_skip_reserved_keys_and_keep_order() {
        let config = EncodeConfig::from_value(json!({
            "source": "in.mkv",
            "video_options": {"quality": 20},
            "output_file": "out.mkv",
            "audio_options": {"audio": [1]},
            "picture_options": {}
        }))
        .unwrap();

        let keys: Vec<&str> = config.sections().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["video_options", "audio_options", "picture_options"]);
    }

    #[test]
    fn loads_configuration_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"source": "a.mkv", "output_file": "b.mkv"}}"#).unwrap();

        let config = EncodeConfig::from_file(&path).unwrap();
        assert_eq!(config.source().unwrap(), "a.mkv");
    }

    #[test]
    fn file_with_invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            EncodeConfig::from_file(&path).unwrap_err(),
            CoreError::ConfigParse(_)
        ));
    }
}
