//! YAML to JSON conversion
//!
//! Mapping keys that are not strings (status codes such as `200`, booleans)
//! are stringified, since JSON object keys are always strings.
//!
//! Only the first document of a multi-document stream is converted. Scalars
//! resolve under YAML 1.2 rules: `yes`, `on` and `0777` stay strings rather
//! than becoming `true` and `511`. Quote or retype such values in the source
//! document when the 1.1 reading is intended.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::{Deserializer, Value as YamlValue};

/// Convert a YAML document to compact JSON bytes
///
/// An empty stream converts to `null`.
///
/// # Examples
/// ```
/// use swagger_ui_handler::spec::yaml_to_json;
/// let json = yaml_to_json(b"swagger: '2.0'\npaths: {}\n").unwrap();
/// assert_eq!(json, br#"{"paths":{},"swagger":"2.0"}"#);
/// ```
pub fn yaml_to_json(input: &[u8]) -> Result<Vec<u8>> {
    let document = match Deserializer::from_slice(input).next() {
        Some(first) => YamlValue::deserialize(first)?,
        None => YamlValue::Null,
    };
    let json = convert_value(document)?;
    serde_json::to_vec(&json).map_err(|e| Error::Conversion(e.to_string()))
}

fn convert_value(value: YamlValue) -> Result<JsonValue> {
    let converted = match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => JsonValue::Number(convert_number(&n)?),
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(convert_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(convert_key(key)?, convert_value(value)?);
            }
            JsonValue::Object(object)
        }
        // Tags carry no meaning for the UI
        YamlValue::Tagged(tagged) => convert_value(tagged.value)?,
    };
    Ok(converted)
}

fn convert_number(n: &serde_yaml::Number) -> Result<Number> {
    if let Some(i) = n.as_i64() {
        return Ok(Number::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Number::from(u));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| Error::Conversion(format!("number {n} cannot be represented in JSON")))
}

fn convert_key(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => convert_key(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(Error::Conversion(
            "mapping keys must be scalars to convert to JSON".to_string(),
        )),
    }
}
