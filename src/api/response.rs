//! Response body handling shared by every endpoint

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Parse a response body. Empty bodies read as `null`, non-JSON bodies as a string.
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Strip one `{data: ...}` envelope if present
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Read a list from a bare array, `{items: [...]}` or `{data: [...]}`; `null` is empty.
/// Paginated endpoints nest the list one envelope deeper, so two are stripped.
pub fn into_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    let list = match unwrap_envelope(unwrap_envelope(value)) {
        Value::Null => return Ok(Vec::new()),
        Value::Object(mut map) if map.contains_key("items") => {
            map.remove("items").unwrap_or(Value::Null)
        }
        other => other,
    };
    if list.is_null() {
        return Ok(Vec::new());
    }
    decode(list)
}

/// Deserialize an already unwrapped value
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::Deserialization(format!("Unexpected response shape: {e}")))
}

/// Message for a failed response: JSON `error` or `message`, else the raw
/// body, else the status line
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Value::Object(map) = parse_body(body) {
        for key in ["error", "message"] {
            if let Some(Value::String(msg)) = map.get(key) {
                if !msg.is_empty() {
                    return msg.clone();
                }
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("{\"ok\":true}"), json!({"ok": true}));
        assert_eq!(parse_body("plain text"), json!("plain text"));
    }

    #[test]
    fn test_unwrap_envelope_only_strips_data() {
        assert_eq!(unwrap_envelope(json!({"data": [1, 2]})), json!([1, 2]));
        assert_eq!(unwrap_envelope(json!({"items": []})), json!({"items": []}));
        assert_eq!(unwrap_envelope(json!(3)), json!(3));
    }

    #[test]
    fn test_into_list_accepts_all_shapes() {
        let bare: Vec<u32> = into_list(json!([1, 2])).unwrap();
        let items: Vec<u32> = into_list(json!({"items": [1, 2], "total": 2})).unwrap();
        let data: Vec<u32> = into_list(json!({"data": [1, 2]})).unwrap();
        let paged: Vec<u32> = into_list(json!({"data": {"data": [1, 2], "page": 1}})).unwrap();
        let empty: Vec<u32> = into_list(Value::Null).unwrap();
        assert_eq!(bare, vec![1, 2]);
        assert_eq!(items, bare);
        assert_eq!(data, bare);
        assert_eq!(paged, bare);
        assert!(empty.is_empty());

        let err = into_list::<u32>(json!({"items": "nope"})).unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }

    #[test]
    fn test_error_message_precedence() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(error_message(status, r#"{"error":"bad","message":"x"}"#), "bad");
        assert_eq!(error_message(status, r#"{"message":"시설이 없습니다"}"#), "시설이 없습니다");
        assert_eq!(error_message(status, "upstream down"), "upstream down");
        assert_eq!(error_message(status, ""), "400 Bad Request");
    }
}
