use axum::{
    body::Bytes,
    response::{IntoResponse, Response},
};
use reqwest::{
    Method, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::Serialize;
use serde_json::Value;

/// Description of one upstream Web API call: verb, path, query and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Call {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present.
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attaches a JSON payload. Serialization of plain data structs cannot
    /// fail; a value that does is sent as `null`.
    pub fn json<T: Serialize>(mut self, payload: &T) -> Self {
        self.body = Some(serde_json::to_value(payload).unwrap_or(Value::Null));
        self
    }
}

/// A successful upstream answer, relayed as-is: status, content type and
/// the raw body bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Relayed {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl Relayed {
    /// True when Spotify answered without content (`204` or an empty body).
    pub fn is_empty(&self) -> bool {
        self.status == StatusCode::NO_CONTENT || self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// The body parsed as JSON, if there is one and it is valid JSON.
    pub fn json(&self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }
}

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        if self.is_empty() {
            return self.status.into_response();
        }

        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));
        (self.status, [(CONTENT_TYPE, content_type)], self.body).into_response()
    }
}
