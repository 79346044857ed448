use super::features;
use crate::error::Result;
use crate::types::MissingReport;
use serde_json::Value as JsonValue;

/// Whether a property value counts as missing
///
/// Missing means: no value at all, `null`, or a string that is empty or only
/// whitespace. Any other present value is not missing, including falsy ones
/// like `0`, `false` or `[]`.
///
/// Whitespace is Unicode `White_Space` plus the ASCII separator controls
/// U+001C..=U+001F.
///
/// # Examples
/// ```
/// use geojson_trim::is_missing;
/// use serde_json::json;
///
/// assert!(is_missing(None));
/// assert!(is_missing(Some(&json!(null))));
/// assert!(is_missing(Some(&json!("  "))));
/// assert!(!is_missing(Some(&json!(0))));
/// assert!(!is_missing(Some(&json!("Acme"))));
/// ```
pub fn is_missing(value: Option<&JsonValue>) -> bool {
    match value {
        None | Some(JsonValue::Null) => true,
        Some(JsonValue::String(s)) => s.chars().all(is_blank_char),
        Some(_) => false,
    }
}

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Count features whose `field` property is missing or blank
///
/// A feature without a `properties` object (absent, `null`, or not an object
/// at all) counts as missing, as does a feature that is not an object. A
/// document without `features` yields an empty report.
///
/// # Arguments
/// * `document` - The root GeoJSON object
/// * `field` - Property key to check
///
/// # Returns
/// * `Ok(MissingReport)` - Total scanned and indices of missing features
/// * `Err(TrimError)` - If the root is not an object or `features` is not an array
pub fn count_missing(document: &JsonValue, field: &str) -> Result<MissingReport> {
    let features = features(document)?.map(Vec::as_slice).unwrap_or_default();

    let missing_indices = features
        .iter()
        .enumerate()
        .filter(|(_, feature)| {
            let value = feature
                .get("properties")
                .and_then(JsonValue::as_object)
                .and_then(|properties| properties.get(field));
            is_missing(value)
        })
        .map(|(index, _)| index)
        .collect();

    Ok(MissingReport {
        field: field.to_string(),
        total: features.len(),
        missing_indices,
    })
}
