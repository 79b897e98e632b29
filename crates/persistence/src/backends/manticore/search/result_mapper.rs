//! Maps Manticore search responses onto [`SearchResponse`].
//!
//! Manticore returns numbers either as JSON numbers or as numeric strings
//! depending on attribute type and version, so every getter accepts both.

use serde_json::Value;
use tracing::warn;

use crate::types::{IdeaData, IdeaView, SearchResponse};

/// Maps a `POST /search` response body.
///
/// Hits without `_source` are skipped. The continuation token is dropped when
/// the page is empty, which marks the end of the scroll.
pub fn map_response(body: &Value) -> SearchResponse {
    let hits = body.get("hits");

    let total = hits
        .and_then(|h| h.get("total"))
        .map(|t| match t.get("value") {
            Some(v) => as_i64(v),
            None => as_i64(t),
        })
        .unwrap_or(0);

    let items: Vec<IdeaView> = hits
        .and_then(|h| h.get("hits"))
        .and_then(Value::as_array)
        .map(|hits| hits.iter().filter_map(map_hit).collect())
        .unwrap_or_default();

    let next_scroll_token = if items.is_empty() {
        None
    } else {
        body.get("scroll")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    SearchResponse {
        items,
        total,
        next_scroll_token,
    }
}

fn map_hit(hit: &Value) -> Option<IdeaView> {
    let Some(source) = hit.get("_source") else {
        warn!(hit = %hit, "Search hit without _source");
        return None;
    };

    let data = IdeaData {
        id: hit.get("_id").map(as_u64).unwrap_or(0),
        idea_id: source.get("idea_id").map(as_u64).unwrap_or(0),
        itinerary_name: string_field(source, "itinerary_name"),
        attraction_name: string_field(source, "attraction_name"),
        tags: string_field(source, "tags"),
        wild_mode: string_field(source, "wild_mode"),
        attraction_location: string_field(source, "attraction_location"),
        experience_duration: source
            .get("experience_duration")
            .map(as_f64)
            .unwrap_or(0.0),
    };
    Some(data.into())
}

fn string_field(source: &Value, name: &str) -> String {
    match source.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn as_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn as_u64(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn as_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
