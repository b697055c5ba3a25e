//! JSON hydration shared by every resource model.

use crate::error::model_error::ModelError;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A typed API entity that can be hydrated from, and written back to, JSON.
///
/// Unset fields are omitted on serialization, so a model read from the wire
/// serializes back to the same mapping.
pub trait ResourceModel: Serialize + DeserializeOwned + Sized {
    #[track_caller]
    fn from_json(json: &str) -> Result<Self, ModelError> {
        Self::from_slice(json.as_bytes())
    }

    /// Hydrate one model from raw response bytes.
    ///
    /// Bytes that are not valid UTF-8 are rejected as a JSON error rather
    /// than replaced.
    #[track_caller]
    fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        serde_json::from_slice(bytes).map_err(ModelError::json)
    }

    /// Hydrate one model from an already-parsed JSON tree.
    #[track_caller]
    fn from_value(value: Value) -> Result<Self, ModelError> {
        serde_json::from_value(value).map_err(ModelError::json)
    }

    #[track_caller]
    fn list_from_json(json: &str) -> Result<Vec<Self>, ModelError> {
        Self::list_from_slice(json.as_bytes())
    }

    /// Hydrate a list response.
    ///
    /// Batched endpoints answer with an array; when only one identifier
    /// matched the server may send a bare object, which becomes a
    /// one-element list.
    #[track_caller]
    fn list_from_slice(bytes: &[u8]) -> Result<Vec<Self>, ModelError> {
        let value: Value = serde_json::from_slice(bytes).map_err(ModelError::json)?;

        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(ModelError::json))
                .collect(),
            Value::Object(map) => Ok(vec![
                serde_json::from_value(Value::Object(map)).map_err(ModelError::json)?,
            ]),
            other => Err(ModelError::validation(format!(
                "Expected a JSON array or object, got {}",
                json_kind(&other)
            ))),
        }
    }

    #[track_caller]
    fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string(self).map_err(ModelError::json)
    }

    #[track_caller]
    fn to_value(&self) -> Result<Value, ModelError> {
        serde_json::to_value(self).map_err(ModelError::json)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Append to an optional list field, creating it on first use.
pub(crate) fn push_item<T>(list: &mut Option<Vec<T>>, item: T) {
    list.get_or_insert_with(Vec::new).push(item);
}

/// Drop every element equal to `item`. An unset list stays unset.
pub(crate) fn remove_item<T: PartialEq>(list: &mut Option<Vec<T>>, item: &T) {
    if let Some(items) = list.as_mut() {
        items.retain(|existing| existing != item);
    }
}
