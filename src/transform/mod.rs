/// Passes over a parsed GeoJSON document
///
/// - `properties_filter`: Keep only allow-listed keys in each feature's properties
/// - `missing_values`: Count features whose value for a property is missing or blank
pub mod missing_values;
pub mod properties_filter;

use crate::error::{Result, TrimError};
use serde_json::Value as JsonValue;

// Re-export commonly used functions
pub use missing_values::{count_missing, is_missing};
pub use properties_filter::retain_allowed_properties;

/// The `features` array of a document
///
/// Returns `Ok(None)` when the document has no `features` field.
fn features(document: &JsonValue) -> Result<Option<&Vec<JsonValue>>> {
    let root = document.as_object().ok_or_else(|| {
        TrimError::InvalidDocument("root value is not a JSON object".to_string())
    })?;

    match root.get("features") {
        None => Ok(None),
        Some(JsonValue::Array(features)) => Ok(Some(features)),
        Some(_) => Err(TrimError::InvalidDocument(
            "\"features\" is not an array".to_string(),
        )),
    }
}

/// Mutable access to the `features` array of a document
///
/// Returns `Ok(None)` when the document has no `features` field.
fn features_mut(document: &mut JsonValue) -> Result<Option<&mut Vec<JsonValue>>> {
    let root = document.as_object_mut().ok_or_else(|| {
        TrimError::InvalidDocument("root value is not a JSON object".to_string())
    })?;

    match root.get_mut("features") {
        None => Ok(None),
        Some(JsonValue::Array(features)) => Ok(Some(features)),
        Some(_) => Err(TrimError::InvalidDocument(
            "\"features\" is not an array".to_string(),
        )),
    }
}
