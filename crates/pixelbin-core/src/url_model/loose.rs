//! Conversion of a caller-supplied JSON object into a [`UrlDescriptor`].
//!
//! Callers outside Rust (the CLI, config files, other SDK layers) hand over
//! loosely typed mappings. This is where a string `"true"` for `f_auto` or a
//! numeric `cloudName` is caught and reported as the codec's own error kind.

use serde_json::{Map, Value};

use super::descriptor::{OperationDescriptor, Param, QueryOptions, UrlDescriptor, Version};
use super::query::{validate_dpr, validate_f_auto};
use crate::error::UrlError;

/// Builds a descriptor from a JSON object using the camelCase keys of the SDK.
///
/// Missing fields stay `None` so that [`super::obj_to_url`] can apply its
/// defaults and report missing required keys.
pub fn descriptor_from_value(value: &Value) -> Result<UrlDescriptor, UrlError> {
    let obj = value
        .as_object()
        .ok_or_else(|| UrlError::IllegalArgument("url object should be a JSON object".into()))?;

    Ok(UrlDescriptor {
        base_url: string_field(obj, "baseUrl")?,
        version: obj
            .get("version")
            .and_then(Value::as_str)
            .and_then(|v| v.parse::<Version>().ok()),
        cloud_name: string_field(obj, "cloudName")?,
        zone: obj.get("zone").and_then(Value::as_str).map(str::to_string),
        pattern: None,
        file_path: string_field(obj, "filePath")?,
        options: options_from_value(obj.get("options"))?,
        transformations: transformations_from_value(obj.get("transformations"))?,
    })
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, UrlError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(UrlError::IllegalArgument(format!(
            "key {key} should be a string"
        ))),
    }
}

fn options_from_value(value: Option<&Value>) -> Result<QueryOptions, UrlError> {
    let obj = match value {
        None | Some(Value::Null) => return Ok(QueryOptions::default()),
        Some(Value::Object(obj)) => obj,
        Some(_) => {
            return Err(UrlError::IllegalArgument(
                "key options should be an object".into(),
            ))
        }
    };

    let dpr = match obj.get("dpr") {
        None | Some(Value::Null) => None,
        Some(v) => {
            let dpr = v.as_f64().ok_or_else(|| {
                UrlError::IllegalQueryParameter(
                    "DPR value should be numeric and should be between 0.1 and 5.0".into(),
                )
            })?;
            validate_dpr(dpr)?;
            Some(dpr)
        }
    };
    let f_auto = match obj.get("f_auto") {
        None | Some(Value::Null) => None,
        Some(v) => Some(validate_f_auto(v)?),
    };
    Ok(QueryOptions { dpr, f_auto })
}

fn transformations_from_value(
    value: Option<&Value>,
) -> Result<Vec<OperationDescriptor>, UrlError> {
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(UrlError::IllegalArgument(
                "key transformations should be a list".into(),
            ))
        }
    };
    items.iter().map(operation_from_value).collect()
}

/// `[]` and `{}` both stand for an empty (nameless) operation.
fn operation_from_value(value: &Value) -> Result<OperationDescriptor, UrlError> {
    let empty = Map::new();
    let obj = match value {
        Value::Object(obj) => obj,
        Value::Array(a) if a.is_empty() => &empty,
        _ => {
            return Err(UrlError::IllegalArgument(
                "transformation should be an object".into(),
            ))
        }
    };

    let plugin = text(obj.get("plugin"));
    let name = text(obj.get("name"));
    let values = match obj.get("values") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) if name.is_empty() => Some(
            items
                .iter()
                .map(|item| Param::new(text(item.get("key")), text(item.get("value"))))
                .collect(),
        ),
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| param_from_value(item, &name))
                .collect::<Result<_, _>>()?,
        ),
        Some(_) => {
            return Err(UrlError::IllegalArgument(format!(
                "values of '{name}' should be a list"
            )))
        }
    };
    Ok(OperationDescriptor {
        plugin,
        name,
        values,
    })
}

/// Key and value must both be truthy: `false`, zero, `""`, lists and objects are missing.
fn param_from_value(item: &Value, name: &str) -> Result<Param, UrlError> {
    let key = param_text(item.get("key"))
        .ok_or_else(|| UrlError::IllegalArgument(format!("key not specified in '{name}'")))?;
    let value = param_text(item.get("value")).ok_or_else(|| {
        UrlError::IllegalArgument(format!("value not specified for '{key}' in '{name}'"))
    })?;
    Ok(Param::new(key, value))
}

fn param_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".into()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Scalar as text; missing or null become empty and are rejected when formatting.
fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
