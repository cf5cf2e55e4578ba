use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{Res, api, config::Config, info, spotify::SpotifyClient, warning};

/// State shared by every handler: the startup configuration and the
/// outbound client. Neither is mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub spotify: SpotifyClient,
}

impl AppState {
    pub fn new(config: Config) -> Res<Self> {
        let spotify = SpotifyClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            spotify,
        })
    }
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(api::health))
        .route("/api/auth", get(api::auth_url))
        .route("/callback", get(api::callback))
        .route("/api/playlists", get(api::playlists))
        .route("/api/search", get(api::search))
        .route("/api/play", post(api::play))
        .route("/api/pause", post(api::pause))
        .route("/api/next", post(api::next))
        .route("/api/previous", post(api::previous))
        .route("/api/current", get(api::current))
        .route("/api/seek", post(api::seek))
        .route("/api/volume", post(api::volume))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warning!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = config.server_address;
    let origins = config.cors_origins.join(", ");
    let app = router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Spotify proxy listening on http://{}", listener.local_addr()?);
    info!("Allowed origins: {}", origins);

    axum::serve(listener, app).await?;
    Ok(())
}
