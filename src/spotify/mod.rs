//! # Spotify Integration Module
//!
//! Outbound HTTP client adapter for the Spotify Web API and accounts service.
//! Every function here performs exactly one request and never retries; the
//! caller decides how an outcome is presented.
//!
//! ## Architecture
//!
//! ```text
//! API handlers (crate::api)
//!          ↓
//! SpotifyClient
//!     ├── auth   - authorization URL and code exchange
//!     └── call   - bearer-authenticated resource calls
//!          ↓
//! reqwest (rustls, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Errors
//!
//! [`SpotifyError`] keeps the upstream status and body when Spotify answered,
//! so handlers can relay them. Transport failures carry no status.

use reqwest::{Client, Method, StatusCode, header::CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::{config::Config, utils};

pub mod auth;
mod call;

pub use call::{Call, Relayed};

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("request to Spotify failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Spotify responded with {status}")]
    Status { status: StatusCode, body: Value },

    #[error("could not decode Spotify response: {0}")]
    Decode(String),
}

impl SpotifyError {
    /// Upstream status code, if Spotify answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SpotifyError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error details suitable for relaying to the caller.
    pub fn details(&self) -> Value {
        match self {
            SpotifyError::Status { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

/// Shared outbound client. Cheap to clone; holds no credentials.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: Url,
    token_url: Url,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Result<Self, SpotifyError> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(SpotifyError::Transport)?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            token_url: config.token_url.clone(),
        })
    }

    /// Issues one bearer-authenticated call against the Web API.
    ///
    /// A 2xx answer is returned with its status, content type and raw body.
    /// Anything else becomes
    /// [`SpotifyError::Status`] carrying the upstream body.
    pub async fn execute(&self, call: &Call, token: &str) -> Result<Relayed, SpotifyError> {
        let url = utils::api_endpoint(&self.api_url, &call.path);

        let mut request = self
            .http
            .request(call.method.clone(), url)
            .bearer_auth(token)
            .query(&call.query);

        if let Some(body) = &call.body {
            request = request.json(body);
        } else if call.method != Method::GET {
            // Spotify rejects body-less PUT/POST without a content length.
            request = request.header(reqwest::header::CONTENT_LENGTH, "0");
        }

        let response = request.send().await.map_err(SpotifyError::Transport)?;
        read_response(response).await
    }

    fn post_form<T: Serialize + ?Sized>(&self, authorization: &str, form: &T) -> reqwest::RequestBuilder {
        self.http
            .post(self.token_url.clone())
            .header(reqwest::header::AUTHORIZATION, authorization)
            .form(form)
    }
}

/// Splits a response into a relayable success or a status error.
///
/// Successful bodies are kept byte for byte. Error bodies are parsed as JSON
/// (falling back to a string) so they can be embedded under `details`.
async fn read_response(response: reqwest::Response) -> Result<Relayed, SpotifyError> {
    let status = response.status();
    let content_type = response.headers().get(CONTENT_TYPE).cloned();
    let body = response.bytes().await.map_err(SpotifyError::Transport)?;

    if status.is_success() {
        return Ok(Relayed {
            status,
            content_type,
            body,
        });
    }

    let body = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };
    Err(SpotifyError::Status { status, body })
}
