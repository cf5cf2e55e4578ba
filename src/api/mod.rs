//! # API Module
//!
//! HTTP handlers for the proxy's inbound surface.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`auth_url`] - Returns the Spotify authorization URL as data
//! - [`callback`] - Completes the authorization-code flow and redirects the
//!   browser back to the frontend
//!
//! ### Resource proxy
//!
//! - [`playlists`], [`search`], [`current`] - relay the upstream JSON
//! - [`play`], [`pause`], [`next`], [`previous`], [`seek`], [`volume`] -
//!   answer `{"success":true}`
//!
//! ### Monitoring
//!
//! - [`health`] - Application status and version
//!
//! ## Forwarding
//!
//! Every resource handler follows the same contract: extract the bearer
//! token ([`BearerToken`]), validate its own parameters, then hand a [`Call`]
//! to [`forward`], which performs the single upstream request and maps any
//! failure to [`ApiError::Upstream`].

mod auth;
mod callback;
mod error;
mod extract;
mod health;
mod library;
mod player;

use axum::Json;

pub use auth::auth_url;
pub use callback::callback;
pub use error::{ApiError, ApiResult};
pub use extract::{ApiQuery, BearerToken, JsonBody, parse_json_body};
pub use health::health;
pub use library::{playlists, search};
pub use player::{NO_ACTIVE_DEVICE, current, next, pause, play, previous, seek, volume};

use crate::{
    server::AppState,
    spotify::{Call, Relayed},
    types::SuccessResponse,
    warning,
};

/// Performs one upstream call on behalf of the caller.
///
/// Failures are logged with the operation message and upstream status, then
/// turned into an [`ApiError::Upstream`] carrying Spotify's status (or 500)
/// and error body. The token itself is never logged.
pub async fn forward(
    state: &AppState,
    token: &BearerToken,
    call: Call,
    message: &str,
) -> ApiResult<Relayed> {
    state
        .spotify
        .execute(&call, token.as_str())
        .await
        .map_err(|e| {
            warning!("{message} ({} {}): {e}", call.method, call.path);
            ApiError::upstream(message, &e)
        })
}

/// Reply of a mutating endpoint once Spotify accepted the call.
pub fn acknowledge(_: Relayed) -> Json<SuccessResponse> {
    Json(SuccessResponse { success: true })
}
