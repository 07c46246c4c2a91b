// SPDX-License-Identifier: MPL-2.0
//! Request payloads and the default response decoding.

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Body of a POST request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Sent byte for byte.
    Text(String),
    /// Serialized to compact JSON text before sending.
    Json(Value),
}

impl Payload {
    /// Serializes any `Serialize` value into a JSON payload.
    ///
    /// Unlike the `From<Value>` conversion this always sends JSON text, so a
    /// string is quoted.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Payload::Json(serde_json::to_value(value)?))
    }

    /// The text that goes on the wire.
    pub fn into_text(self) -> Result<String> {
        match self {
            Payload::Text(text) => Ok(text),
            Payload::Json(value) => Ok(serde_json::to_string(&value)?),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

/// Objects, arrays and null become JSON. Strings, numbers and booleans are
/// sent as their plain text, so `json!("raw")` posts `raw`.
impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Payload::Text(text),
            Value::Number(n) => Payload::Text(n.to_string()),
            Value::Bool(b) => Payload::Text(b.to_string()),
            other => Payload::Json(other),
        }
    }
}

/// A response body decoded by the default parser.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// The body was not valid JSON and is returned verbatim.
    Text(String),
}

impl ResponseBody {
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            ResponseBody::Json(_) => None,
        }
    }
}

/// Decodes `text` as JSON, falling back to the raw text. Never fails.
#[must_use]
pub fn parse_body(text: String) -> ResponseBody {
    match serde_json::from_str(&text) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_payload_is_compact() {
        let payload = Payload::from(json!({"x": 1}));
        assert_eq!(payload.into_text().unwrap(), r#"{"x":1}"#);
    }

    #[test]
    fn json_scalars_are_sent_as_plain_text() {
        assert_eq!(Payload::from(json!("raw")), Payload::Text("raw".into()));
        assert_eq!(Payload::from(json!(42)).into_text().unwrap(), "42");
        assert_eq!(Payload::from(json!(true)).into_text().unwrap(), "true");
        assert_eq!(Payload::from(json!(null)).into_text().unwrap(), "null");
        assert_eq!(Payload::from(json!([1, 2])).into_text().unwrap(), "[1,2]");
    }

    #[test]
    fn explicit_json_quotes_strings() {
        assert_eq!(Payload::json("raw").unwrap().into_text().unwrap(), r#""raw""#);
    }

    #[test]
    fn text_payload_is_unchanged() {
        assert_eq!(Payload::from("raw").into_text().unwrap(), "raw");
    }

    #[test]
    fn serializable_structs_become_json() {
        #[derive(Serialize)]
        struct Login<'a> {
            user: &'a str,
            remember: bool,
        }

        let payload = Payload::json(&Login {
            user: "admin",
            remember: true,
        })
        .unwrap();
        assert_eq!(
            payload.into_text().unwrap(),
            r#"{"user":"admin","remember":true}"#
        );
    }

    #[test]
    fn malformed_json_falls_back_to_text() {
        assert_eq!(
            parse_body("not json".to_string()),
            ResponseBody::Text("not json".to_string())
        );
    }

    #[test]
    fn valid_json_is_decoded() {
        let body = parse_body(r#"{"code": 200, "msg": "ok"}"#.to_string());
        assert_eq!(body.as_json(), Some(&json!({"code": 200, "msg": "ok"})));
    }

    #[test]
    fn empty_body_is_text() {
        assert_eq!(parse_body(String::new()).as_text(), Some(""));
    }
}
