use url::Url;

use crate::{config::Config, types::TokenResponse, utils};

use super::{SpotifyClient, SpotifyError, read_response};

/// Builds the Spotify authorization URL the browser is sent to.
///
/// The URL carries `response_type=code`, the client id, the space-delimited
/// scope list, the registered redirect URI and `show_dialog=false`. Building
/// it cannot fail: every input was validated when the [`Config`] was created.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config);
/// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
/// ```
pub fn authorize_url(config: &Config) -> Url {
    let mut url = config.auth_url.clone();
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &config.client_id)
        .append_pair("scope", &config.scope)
        .append_pair("redirect_uri", config.redirect_uri.as_str())
        .append_pair("show_dialog", "false");
    url
}

impl SpotifyClient {
    /// Exchanges an authorization code for access and refresh tokens.
    ///
    /// Posts the form `code`, `redirect_uri`, `grant_type=authorization_code`
    /// to the token endpoint, authenticated with the client credentials as a
    /// `Basic` header. Exactly one request is made.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Transport`] when the token endpoint is unreachable
    /// - [`SpotifyError::Status`] for any non-2xx answer
    /// - [`SpotifyError::Decode`] when the answer carries no access token
    pub async fn exchange_code(
        &self,
        config: &Config,
        code: &str,
    ) -> Result<TokenResponse, SpotifyError> {
        let authorization = utils::basic_auth_header(&config.client_id, &config.client_secret);

        let response = self
            .post_form(
                &authorization,
                &[
                    ("code", code),
                    ("redirect_uri", config.redirect_uri.as_str()),
                    ("grant_type", "authorization_code"),
                ],
            )
            .send()
            .await
            .map_err(SpotifyError::Transport)?;

        let relayed = read_response(response).await?;
        let body = relayed
            .json()
            .ok_or_else(|| SpotifyError::Decode("token response is not JSON".to_string()))?;

        serde_json::from_value::<TokenResponse>(body)
            .map_err(|e| SpotifyError::Decode(e.to_string()))
    }
}
