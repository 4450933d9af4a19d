//! Closed value type for configuration options.
//!
//! Every option value the compiler touches is converted from raw JSON into
//! [`OptionValue`] first, so the formatting routines match on a closed set of
//! variants instead of probing a dynamic value. Maps recurse because the
//! filters section nests one level deeper than a scalar (a filter key can
//! hold a map whose entries are themselves maps of custom settings).

use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// A configuration option value in one of the shapes the compiler accepts.
///
/// Map entries keep the order in which they were authored; that order is
/// what determines the order of emitted command-line tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// JSON boolean. Controls flag presence/negation in simple options.
    Boolean(bool),
    /// JSON integer.
    Integer(i64),
    /// JSON non-integral number.
    Float(f64),
    /// JSON string.
    String(String),
    /// JSON array, rendered as a comma-delimited token.
    List(Vec<OptionValue>),
    /// JSON object, rendered by the custom/crop/time-range formats.
    Map(Vec<(String, OptionValue)>),
}

impl OptionValue {
    /// Converts a raw JSON value into an [`OptionValue`].
    ///
    /// `option` names the option being converted and only feeds error
    /// messages. JSON `null` is rejected: it has no command-line rendering.
    pub fn from_json(option: &str, value: &Value) -> CoreResult<Self> {
        match value {
            Value::Null => Err(CoreError::Format {
                option: option.to_string(),
                reason: "null has no command-line representation".to_string(),
            }),
            Value::Bool(b) => Ok(OptionValue::Boolean(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(OptionValue::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(OptionValue::Float(f))
                } else {
                    Err(CoreError::Format {
                        option: option.to_string(),
                        reason: format!("number {n} is out of representable range"),
                    })
                }
            }
            Value::String(s) => Ok(OptionValue::String(s.clone())),
            Value::Array(items) => {
                let converted = items
                    .iter()
                    .map(|item| Self::from_json(option, item))
                    .collect::<CoreResult<Vec<_>>>()?;
                Ok(OptionValue::List(converted))
            }
            Value::Object(entries) => {
                let converted = entries
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), Self::from_json(option, v)?)))
                    .collect::<CoreResult<Vec<_>>>()?;
                Ok(OptionValue::Map(converted))
            }
        }
    }

    /// Returns `true` for the four scalar variants.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, OptionValue::List(_) | OptionValue::Map(_))
    }

    /// Short shape name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Boolean(_) => "boolean",
            OptionValue::Integer(_) => "integer",
            OptionValue::Float(_) => "float",
            OptionValue::String(_) => "string",
            OptionValue::List(_) => "list",
            OptionValue::Map(_) => "map",
        }
    }

    /// Renders a scalar variant as the text that goes into a token.
    ///
    /// Lists and maps are not renderable here and produce a `Format` error
    /// naming `option`.
    pub fn scalar_text(&self, option: &str) -> CoreResult<String> {
        match self {
            OptionValue::Boolean(b) => Ok(b.to_string()),
            OptionValue::Integer(i) => Ok(i.to_string()),
            OptionValue::Float(f) => Ok(f.to_string()),
            OptionValue::String(s) => Ok(s.clone()),
            OptionValue::List(_) | OptionValue::Map(_) => Err(CoreError::Format {
                option: option.to_string(),
                reason: format!("expected a scalar value, got a {}", self.type_name()),
            }),
        }
    }
}
