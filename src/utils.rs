use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::Value;
use url::Url;

use crate::types::{CallbackParams, PlayPayload};

const BEARER_PREFIX: &str = "Bearer ";
const TRACK_URI_PREFIX: &str = "spotify:track:";

/// Strips the literal `Bearer ` prefix from an Authorization header value.
///
/// Returns `None` for any other scheme or an empty token.
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Builds the value of a `Basic` Authorization header for the client credentials.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {credentials}")
}

/// Turns the optional URI of a play request into the upstream payload.
///
/// Track URIs start a single track via `uris`; anything else (playlist, album,
/// artist) is a context. No URI resumes playback with an empty payload.
pub fn play_payload(uri: Option<&str>) -> PlayPayload {
    match uri.map(str::trim).filter(|uri| !uri.is_empty()) {
        Some(uri) if uri.starts_with(TRACK_URI_PREFIX) => PlayPayload {
            uris: Some(vec![uri.to_string()]),
            context_uri: None,
        },
        Some(uri) => PlayPayload {
            uris: None,
            context_uri: Some(uri.to_string()),
        },
        None => PlayPayload::default(),
    }
}

/// Truncates a JSON number (or numeric string) toward zero.
///
/// Returns `None` when the value is not numeric or does not fit an `i64`.
pub fn truncate_number(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() || number.abs() >= i64::MAX as f64 {
        return None;
    }

    Some(number.trunc() as i64)
}

/// Reads `code` and `error` from the raw callback query string.
///
/// Never fails: repeated keys keep their first value and unknown keys are
/// ignored, so the callback can always answer with a redirect.
pub fn callback_params(query: Option<&str>) -> CallbackParams {
    let mut params = CallbackParams::default();
    for (key, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
        let slot = match &*key {
            "code" => &mut params.code,
            "error" => &mut params.error,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }
    params
}

/// Builds the URL the browser is sent back to after the OAuth callback.
///
/// Always targets the frontend root (`<frontend>/?...`), regardless of any
/// path configured on the frontend URL.
pub fn frontend_redirect(frontend: &Url, params: &[(&str, &str)]) -> String {
    let mut target = frontend.clone();
    target.set_path("/");
    target.set_fragment(None);
    target.set_query(None);
    target.query_pairs_mut().extend_pairs(params);
    target.to_string()
}

/// Joins an API path onto the configured upstream base URL.
pub fn api_endpoint(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
