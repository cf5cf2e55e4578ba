use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use super::{ApiError, ApiResult, BearerToken, JsonBody, acknowledge, forward};
use crate::{
    server::AppState,
    spotify::Call,
    types::{PlayRequest, SeekRequest, SuccessResponse, VolumeRequest},
    utils,
};

/// Message for a play request Spotify answers with 404.
pub const NO_ACTIVE_DEVICE: &str =
    "No active device found. Open Spotify on one of your devices and try again.";

/// Current playback state; nothing playing reads as a stopped player.
pub async fn current(State(state): State<AppState>, token: BearerToken) -> ApiResult<Response> {
    let relayed = forward(
        &state,
        &token,
        Call::get("/me/player"),
        "Failed to get current playback",
    )
    .await?;

    if relayed.is_empty() {
        return Ok(Json(json!({
            "is_playing": false,
            "item": null,
            "progress_ms": 0
        }))
        .into_response());
    }

    Ok(relayed.into_response())
}

/// Starts or resumes playback.
///
/// A track URI plays that single track, any other URI is played as a
/// context, and no URI resumes whatever was playing.
pub async fn play(
    State(state): State<AppState>,
    token: BearerToken,
    JsonBody(body): JsonBody<PlayRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let call = Call::put("/me/player/play")
        .query_opt("device_id", body.device_id)
        .json(&utils::play_payload(body.uri.as_deref()));

    forward(&state, &token, call, "Failed to start playback")
        .await
        .map(acknowledge)
        .map_err(|e| match e {
            ApiError::Upstream {
                status, details, ..
            } if status == StatusCode::NOT_FOUND => ApiError::Upstream {
                status,
                message: NO_ACTIVE_DEVICE.to_string(),
                details,
            },
            other => other,
        })
}

pub async fn pause(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<Json<SuccessResponse>> {
    let call = Call::put("/me/player/pause");
    forward(&state, &token, call, "Failed to pause playback")
        .await
        .map(acknowledge)
}

pub async fn next(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<Json<SuccessResponse>> {
    let call = Call::post("/me/player/next");
    forward(&state, &token, call, "Failed to skip to next track")
        .await
        .map(acknowledge)
}

pub async fn previous(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<Json<SuccessResponse>> {
    let call = Call::post("/me/player/previous");
    forward(&state, &token, call, "Failed to skip to previous track")
        .await
        .map(acknowledge)
}

/// Seeks within the current track. Fractional positions are truncated.
pub async fn seek(
    State(state): State<AppState>,
    token: BearerToken,
    JsonBody(body): JsonBody<SeekRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let position_ms = required_integer(body.position_ms.as_ref(), "position_ms")?;

    let call = Call::put("/me/player/seek").query("position_ms", position_ms);
    forward(&state, &token, call, "Failed to seek")
        .await
        .map(acknowledge)
}

/// Sets the playback volume. Fractional percentages are truncated.
pub async fn volume(
    State(state): State<AppState>,
    token: BearerToken,
    JsonBody(body): JsonBody<VolumeRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let volume_percent = required_integer(body.volume_percent.as_ref(), "volume_percent")?;

    let call = Call::put("/me/player/volume").query("volume_percent", volume_percent);
    forward(&state, &token, call, "Failed to set volume")
        .await
        .map(acknowledge)
}

fn required_integer(value: Option<&Value>, name: &str) -> ApiResult<i64> {
    match value {
        None | Some(Value::Null) => Err(ApiError::bad_request(format!("{name} is required"))),
        Some(value) => utils::truncate_number(value)
            .ok_or_else(|| ApiError::bad_request(format!("{name} must be a number"))),
    }
}
