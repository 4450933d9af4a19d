//! Schema validation for encoding configurations.
//!
//! A [`SchemaValidator`] holds one compiled JSON Schema and checks
//! configuration documents against it before they reach the compiler. The
//! schema is always an explicitly provided value: the compiled-in default
//! from [`SchemaValidator::bundled`], a file, or an in-memory document.
//! Nothing is ever resolved relative to the running executable.
//!
//! Failures split into two kinds with different audiences: a malformed
//! schema is a [`CoreError::Schema`] (a defect in the schema document), and
//! a non-conforming configuration is a [`CoreError::Validation`] (an error
//! the configuration author can fix). Both carry a JSON pointer to the
//! offending node.

use std::path::Path;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{ValidationError, Validator};
use serde_json::Value;

use crate::config::{EncodeConfig, read_json_file};
use crate::error::{CoreError, CoreResult};

/// The schema document compiled into the library.
const BUNDLED_SCHEMA: &str = include_str!("../schema/hbrake.schema.json");

/// Validates configuration documents against a compiled JSON Schema.
#[derive(Debug)]
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Builds a validator from the schema bundled with the library.
    pub fn bundled() -> CoreResult<Self> {
        let schema: Value = serde_json::from_str(BUNDLED_SCHEMA)?;
        Self::from_value(&schema)
    }

    /// Builds a validator from a schema file on disk.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        log::debug!("Loading schema from {}", path.display());
        let schema = read_json_file(path)?;
        Self::from_value(&schema)
    }

    /// Builds a validator from an in-memory schema document.
    ///
    /// The document is checked against its metaschema first, so a malformed
    /// schema fails here with a pointer into the schema rather than
    /// producing misleading validation results later.
    pub fn from_value(schema: &Value) -> CoreResult<Self> {
        jsonschema::meta::validate(schema).map_err(|err| CoreError::Schema {
            message: err.to_string(),
            path: err.instance_path.to_string(),
        })?;
        let validator = jsonschema::validator_for(schema).map_err(|err| CoreError::Schema {
            message: err.to_string(),
            path: err.instance_path.to_string(),
        })?;
        Ok(Self { validator })
    }

    /// Checks a configuration document against the schema.
    pub fn validate(&self, data: &Value) -> CoreResult<()> {
        self.validator
            .validate(data)
            .map_err(|err| CoreError::Validation {
                message: err.to_string(),
                path: error_location(&err),
            })
    }

    /// Validates a document and wraps it as an [`EncodeConfig`].
    ///
    /// The wrapped configuration is the validated document unchanged: no
    /// defaults are injected and no fields are reordered or dropped.
    pub fn validated(&self, data: Value) -> CoreResult<EncodeConfig> {
        self.validate(&data)?;
        EncodeConfig::from_value(data)
    }

    /// Loads a configuration file, validates it, and wraps it.
    pub fn validated_from_file(&self, path: &Path) -> CoreResult<EncodeConfig> {
        self.validated(read_json_file(path)?)
    }
}

/// JSON pointer for a validation error.
///
/// An `additionalProperties` violation is reported by jsonschema at the
/// enclosing object, but the actionable location is the unexpected property
/// itself, so the pointer is extended with the offending key.
fn error_location(error: &ValidationError<'_>) -> String {
    let base = error.instance_path.to_string();
    if let ValidationErrorKind::AdditionalProperties { unexpected } = &error.kind {
        if let Some(first) = unexpected.first() {
            return format!("{base}/{first}");
        }
    }
    base
}
