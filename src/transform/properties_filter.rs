use super::features_mut;
use crate::error::{Result, TrimError};
use crate::types::{AllowList, FilterStats};
use serde_json::Value as JsonValue;

/// Keep only allow-listed keys in the `properties` of every feature
///
/// Each retained value is moved over untouched, and retained keys keep their
/// original order. Nothing outside `properties` is modified: top-level fields
/// such as `type` or `crs`, and feature fields such as `geometry` or `id`,
/// stay exactly as parsed.
///
/// A document without `features` is accepted and left as is. A feature with
/// no `properties` key, or with `properties: null`, is also left as is.
///
/// # Arguments
/// * `document` - The root GeoJSON object
/// * `allow` - Keys to keep
///
/// # Returns
/// * `Ok(FilterStats)` - Counts of features visited and properties kept/dropped
/// * `Err(TrimError)` - If the document is not shaped like a feature collection
///
/// # Examples
/// ```
/// use geojson_trim::{retain_allowed_properties, AllowList};
/// use serde_json::json;
///
/// let mut doc = json!({
///     "features": [{"properties": {"GEOID": "1", "foo": "bar"}}]
/// });
/// let allow = AllowList::new(["GEOID"]).unwrap();
///
/// retain_allowed_properties(&mut doc, &allow).unwrap();
///
/// assert_eq!(doc, json!({"features": [{"properties": {"GEOID": "1"}}]}));
/// ```
pub fn retain_allowed_properties(document: &mut JsonValue, allow: &AllowList) -> Result<FilterStats> {
    let mut stats = FilterStats::default();

    let Some(features) = features_mut(document)? else {
        return Ok(stats);
    };

    for (index, feature) in features.iter_mut().enumerate() {
        let feature = feature.as_object_mut().ok_or_else(|| TrimError::InvalidFeature {
            index,
            reason: "feature is not a JSON object".to_string(),
        })?;
        stats.features += 1;

        match feature.get_mut("properties") {
            None | Some(JsonValue::Null) => {}
            Some(JsonValue::Object(properties)) => {
                let before = properties.len();
                let original = std::mem::take(properties);
                *properties = original
                    .into_iter()
                    .filter(|(key, _)| allow.contains(key))
                    .collect();
                stats.kept += properties.len();
                stats.dropped += before - properties.len();
            }
            Some(_) => {
                return Err(TrimError::InvalidFeature {
                    index,
                    reason: "\"properties\" is not an object".to_string(),
                });
            }
        }
    }

    Ok(stats)
}
