use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{server::AppState, success, utils, warning};

/// Handles the redirect from Spotify's authorization server.
///
/// The caller is a full-page browser navigation, so every outcome is a
/// `302 Found` back to the frontend rather than a JSON body:
///
/// - `?error=<value>` from Spotify is passed through unchanged
/// - a missing `code` becomes `?error=no_code`
/// - a successful exchange yields `?access_token=...[&refresh_token=...]`
/// - a failed exchange becomes `?error=auth_failed` and is only logged
///
/// At most one request is made to the token endpoint. The query string is
/// read leniently (first value wins) so no input escapes the redirect.
pub async fn callback(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let frontend = &state.config.frontend_url;
    let params = utils::callback_params(query.as_deref());

    if let Some(error) = params.error.as_deref() {
        return redirect(utils::frontend_redirect(frontend, &[("error", error)]));
    }

    let Some(code) = params.code.as_deref().filter(|code| !code.is_empty()) else {
        return redirect(utils::frontend_redirect(frontend, &[("error", "no_code")]));
    };

    match state.spotify.exchange_code(&state.config, code).await {
        Ok(token) => {
            success!("Token exchange succeeded (expires in {}s)", token.expires_in);
            let mut query = vec![("access_token", token.access_token.as_str())];
            if let Some(refresh_token) = token.refresh_token.as_deref() {
                query.push(("refresh_token", refresh_token));
            }
            redirect(utils::frontend_redirect(frontend, &query))
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            redirect(utils::frontend_redirect(frontend, &[("error", "auth_failed")]))
        }
    }
}

fn redirect(location: String) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}
