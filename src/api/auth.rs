use axum::{Json, extract::State};

use crate::{server::AppState, spotify::auth::authorize_url, types::AuthUrlResponse};

/// Returns the authorization URL for the frontend to navigate to.
pub async fn auth_url(State(state): State<AppState>) -> Json<AuthUrlResponse> {
    Json(AuthUrlResponse {
        auth_url: authorize_url(&state.config).to_string(),
    })
}
