//! Caller-facing request options.
//!
//! # Design
//! `RequestOptions` is the options bag passed to `ApiClient::request`. The
//! body is either text the caller already serialized or a JSON value the
//! client serializes on the way out. Anything the client does not understand
//! goes in `extra` and reaches the transport untouched.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Request payload before it is turned into wire text.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent exactly as given.
    Text(String),
    /// Serialized with `serde_json::to_string` when the request is built.
    Json(Value),
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

/// Headers, body, and pass-through settings for a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    pub extra: BTreeMap<String, Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach any serializable value as a JSON body.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(value)?;
        Ok(self.body(RequestBody::Json(value)))
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_collects_headers_in_order() {
        let options = RequestOptions::new()
            .header("Accept", "text/plain")
            .header("X-Trace", "1");
        assert_eq!(
            options.headers,
            vec![
                ("Accept".to_string(), "text/plain".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn string_bodies_stay_text() {
        let options = RequestOptions::new().body("already encoded");
        assert_eq!(
            options.body,
            Some(RequestBody::Text("already encoded".to_string()))
        );
    }

    #[test]
    fn json_accepts_serializable_structs() {
        #[derive(Serialize)]
        struct Payload {
            id: u32,
        }
        let options = RequestOptions::new().json(&Payload { id: 7 }).unwrap();
        assert_eq!(options.body, Some(RequestBody::Json(json!({"id": 7}))));
    }

    #[test]
    fn json_rejects_maps_with_non_string_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], "x");
        let err = RequestOptions::new().json(&map).unwrap_err();
        assert!(matches!(err, ApiError::Serialization(_)));
    }
}
