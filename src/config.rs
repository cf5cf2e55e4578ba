//! Configuration management for the Spotify proxy.
//!
//! This module loads configuration values from environment variables and
//! `.env` files and validates them once at startup into a [`Config`] value.
//! Handlers receive the validated configuration by reference and never read
//! the environment themselves.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. A `.env` file (explicit path, working directory, or local data directory)
//! 3. Application defaults (where applicable)

use std::{
    env, fmt,
    net::SocketAddr,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use thiserror::Error;
use url::Url;

pub const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "SPOTIFY_API_REDIRECT_URI";
pub const FRONTEND_URL_VAR: &str = "FRONTEND_URL";
pub const CORS_ORIGINS_VAR: &str = "CORS_ORIGINS";
pub const SERVER_ADDRESS_VAR: &str = "SERVER_ADDRESS";
pub const AUTH_URL_VAR: &str = "SPOTIFY_API_AUTH_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const SCOPE_VAR: &str = "SPOTIFY_API_AUTH_SCOPE";
pub const TIMEOUT_VAR: &str = "UPSTREAM_TIMEOUT_SECS";

const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:3001/callback";
const DEFAULT_FRONTEND_URL: &str = "http://127.0.0.1:5173";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3001";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Scopes requested from the user during authorization.
pub const DEFAULT_SCOPE: &str = "user-read-playback-state user-modify-playback-state user-read-currently-playing playlist-read-private playlist-read-collaborative user-read-private user-read-email streaming";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} is not a valid value: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Validated runtime configuration, built once at startup.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: Url,
    pub frontend_url: Url,
    pub cors_origins: Vec<String>,
    pub server_address: SocketAddr,
    pub auth_url: Url,
    pub token_url: Url,
    pub api_url: Url,
    pub scope: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones. Client id and secret
    /// are required; everything else falls back to a default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let client_id = get(CLIENT_ID_VAR).ok_or(ConfigError::Missing(CLIENT_ID_VAR))?;
        let client_secret =
            get(CLIENT_SECRET_VAR).ok_or(ConfigError::Missing(CLIENT_SECRET_VAR))?;

        let url_var = |var: &'static str, default: &str| {
            let raw = get(var).unwrap_or_else(|| default.to_string());
            Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { var, source })
        };

        let redirect_uri = url_var(REDIRECT_URI_VAR, DEFAULT_REDIRECT_URI)?;
        let frontend_url = url_var(FRONTEND_URL_VAR, DEFAULT_FRONTEND_URL)?;
        let auth_url = url_var(AUTH_URL_VAR, DEFAULT_AUTH_URL)?;
        let token_url = url_var(TOKEN_URL_VAR, DEFAULT_TOKEN_URL)?;
        let api_url = url_var(API_URL_VAR, DEFAULT_API_URL)?;

        let cors_origins = match get(CORS_ORIGINS_VAR) {
            Some(list) => parse_origins(&list),
            None => vec![frontend_url.origin().ascii_serialization()],
        };

        let address = get(SERVER_ADDRESS_VAR).unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_address =
            SocketAddr::from_str(&address).map_err(|_| ConfigError::InvalidValue {
                var: SERVER_ADDRESS_VAR,
                value: address.clone(),
            })?;

        let upstream_timeout = match get(TIMEOUT_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidValue {
                    var: TIMEOUT_VAR,
                    value: raw,
                })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            frontend_url,
            cors_origins,
            server_address,
            auth_url,
            token_url,
            api_url,
            scope: get(SCOPE_VAR).unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            upstream_timeout,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri.as_str())
            .field("frontend_url", &self.frontend_url.as_str())
            .field("cors_origins", &self.cors_origins)
            .field("server_address", &self.server_address)
            .field("auth_url", &self.auth_url.as_str())
            .field("token_url", &self.token_url.as_str())
            .field("api_url", &self.api_url.as_str())
            .field("scope", &self.scope)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
pub fn parse_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads environment variables from a `.env` file.
///
/// Looks for the file in this order and stops at the first one found:
/// 1. The explicit `path`, if given
/// 2. `.env` in the current working directory
/// 3. `spotify-proxy/.env` in the platform-specific local data directory
///
/// A missing file is not an error; the configuration may come entirely from
/// the process environment. Variables already set in the environment are
/// never overridden.
///
/// Returns the path that was loaded, if any.
///
/// # Example
///
/// ```
/// use spotify_proxy::config;
///
/// if let Some(path) = config::load_env(None) {
///     println!("Loaded {}", path.display());
/// }
/// ```
pub fn load_env(path: Option<&Path>) -> Option<PathBuf> {
    let candidates = match path {
        Some(path) => vec![path.to_path_buf()],
        None => {
            let mut data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.push("spotify-proxy/.env");
            vec![PathBuf::from(".env"), data_dir]
        }
    };

    candidates
        .into_iter()
        .find(|candidate| candidate.is_file() && dotenv::from_path(candidate).is_ok())
}
