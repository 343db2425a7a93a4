use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Turn an API payload into listings.
///
/// Anything but a JSON array yields an empty collection, and records that do
/// not decode are skipped, so upstream garbage degrades to "no results".
pub fn decode_listings<T: DeserializeOwned>(payload: Value, source: &str) -> Vec<T> {
    let items = match payload {
        Value::Array(items) => items,
        other => {
            warn!("{} returned {} instead of an array of listings", source, kind_of(&other));
            return Vec::new();
        }
    };

    let total = items.len();
    let listings: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value(item) {
            Ok(listing) => Some(listing),
            Err(e) => {
                warn!("Skipped listing {} from {}: {}", idx, source, e);
                None
            }
        })
        .collect();

    debug!("Decoded {} of {} listings from {}", listings.len(), total, source);
    listings
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
