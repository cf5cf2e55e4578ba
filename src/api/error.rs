use axum::{
    Json,
    response::{IntoResponse, Response},
};
use reqwest::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

use crate::spotify::SpotifyError;

/// Failure of a JSON endpoint, rendered as `{error[, details]}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No token provided")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Upstream {
        status: StatusCode,
        message: String,
        details: Value,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Wraps an upstream failure, keeping Spotify's status (default 500).
    pub fn upstream(message: impl Into<String>, err: &SpotifyError) -> Self {
        ApiError::Upstream {
            status: err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: message.into(),
            details: err.details(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Upstream {
                message, details, ..
            } => json!({ "error": message, "details": details }),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
