use axum::extract::State;

use super::{ApiError, ApiQuery, ApiResult, BearerToken, forward};
use crate::{
    server::AppState,
    spotify::{Call, Relayed},
    types::{PlaylistsParams, SearchParams},
};

const DEFAULT_SEARCH_TYPES: &str = "track,artist,album,playlist";
const DEFAULT_SEARCH_LIMIT: u32 = 20;

pub async fn playlists(
    State(state): State<AppState>,
    token: BearerToken,
    ApiQuery(params): ApiQuery<PlaylistsParams>,
) -> ApiResult<Relayed> {
    let call = Call::get("/me/playlists")
        .query_opt("limit", params.limit)
        .query_opt("offset", params.offset);

    forward(&state, &token, call, "Failed to fetch playlists").await
}

/// Searches the catalog. `q` is required; `type` and `limit` have defaults.
pub async fn search(
    State(state): State<AppState>,
    token: BearerToken,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> ApiResult<Relayed> {
    let Some(q) = params.q.filter(|q| !q.trim().is_empty()) else {
        return Err(ApiError::bad_request("Query parameter 'q' is required"));
    };

    let call = Call::get("/search")
        .query("q", q)
        .query("type", params.kind.as_deref().unwrap_or(DEFAULT_SEARCH_TYPES))
        .query("limit", params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT))
        .query_opt("offset", params.offset)
        .query_opt("market", params.market);

    forward(&state, &token, call, "Failed to search").await
}
