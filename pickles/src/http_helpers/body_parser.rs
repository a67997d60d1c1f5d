//! Query string and request body decoding used by transport adapters.

use serde_json::{Map, Value};

use super::{QueryParams, QueryValue};
use crate::error::RouterError;

fn decode_pairs(input: &str) -> Result<Vec<(String, String)>, RouterError> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(input)
        .map_err(|e| RouterError::MalformedBody(e.to_string()))
}

/// `key[]` collects into a list under `key`.
fn split_list_key(key: &str) -> (&str, bool) {
    match key.strip_suffix("[]") {
        Some(base) => (base, true),
        None => (key, false),
    }
}

/// Decodes a raw query string (without the leading `?`).
///
/// A key that repeats, or that is written as `key[]`, becomes
/// [`QueryValue::Multiple`]; anything else is [`QueryValue::Single`]. Keys
/// keep the position of their first appearance.
pub fn parse_query_string(query: &str) -> Result<QueryParams, RouterError> {
    let mut params = QueryParams::new();

    for (raw_key, value) in decode_pairs(query)? {
        let (key, is_list) = split_list_key(&raw_key);
        match params.get_mut(key) {
            Some(QueryValue::Multiple(values)) => values.push(value),
            Some(slot) => {
                if let QueryValue::Single(first) = slot {
                    *slot = QueryValue::Multiple(vec![std::mem::take(first), value]);
                }
            }
            None if is_list => {
                params.insert(key.to_string(), QueryValue::Multiple(vec![value]));
            }
            None => {
                params.insert(key.to_string(), QueryValue::Single(value));
            }
        }
    }

    Ok(params)
}

/// Decodes a raw request body according to its content type.
///
/// JSON bodies must hold an object. Form bodies produce string values, with
/// repeated or `key[]` keys gathered into arrays. Either kind must be valid
/// UTF-8. Other content types and empty bodies yield an empty map.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Map<String, Value>, RouterError> {
    let content_type = content_type.unwrap_or_default().to_ascii_lowercase();
    let is_json = content_type.contains("application/json");
    let is_form = content_type.contains("application/x-www-form-urlencoded");

    if !is_json && !is_form {
        return Ok(Map::new());
    }

    let body = std::str::from_utf8(body)
        .map_err(|e| RouterError::MalformedBody(format!("body is not valid UTF-8: {e}")))?;
    if body.trim().is_empty() {
        return Ok(Map::new());
    }

    if is_json {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(RouterError::MalformedBody(format!(
                "expected a JSON object, got {other}"
            ))),
            Err(e) => Err(RouterError::MalformedBody(e.to_string())),
        }
    } else {
        let mut data = Map::new();
        for (key, values) in parse_query_string(body)? {
            let value = match values {
                QueryValue::Single(value) => Value::String(value),
                QueryValue::Multiple(values) => {
                    Value::Array(values.into_iter().map(Value::String).collect())
                }
            };
            data.insert(key, value);
        }
        Ok(data)
    }
}
