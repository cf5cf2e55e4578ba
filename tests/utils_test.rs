use pretty_assertions::assert_eq;
use reqwest::Method;
use serde_json::{Value, json};
use spotify_proxy::spotify::Call;
use spotify_proxy::types::{CallbackParams, PlayPayload};
use spotify_proxy::utils::*;
use url::Url;

#[test]
fn test_bearer_token() {
    assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
    assert_eq!(bearer_token("Bearer   spaced  "), Some("spaced"));

    // Other schemes and empty tokens are treated as missing
    assert_eq!(bearer_token("Basic abc123"), None);
    assert_eq!(bearer_token("bearer abc123"), None);
    assert_eq!(bearer_token("Bearer "), None);
    assert_eq!(bearer_token(""), None);
}

#[test]
fn test_basic_auth_header() {
    assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
    assert_eq!(
        basic_auth_header("client-id", "client-secret"),
        "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ="
    );
}

#[test]
fn test_play_payload_track_uri() {
    let payload = play_payload(Some("spotify:track:123"));
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({ "uris": ["spotify:track:123"] })
    );
}

#[test]
fn test_play_payload_context_uri() {
    for uri in ["spotify:playlist:xyz", "spotify:album:abc", "spotify:artist:def"] {
        let payload = play_payload(Some(uri));
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "context_uri": uri })
        );
    }
}

#[test]
fn test_play_payload_without_uri() {
    assert_eq!(play_payload(None), PlayPayload::default());
    assert_eq!(play_payload(Some("  ")), PlayPayload::default());
    assert_eq!(serde_json::to_value(play_payload(None)).unwrap(), json!({}));
}

#[test]
fn test_truncate_number() {
    assert_eq!(truncate_number(&json!(1500.7)), Some(1500));
    assert_eq!(truncate_number(&json!(1500)), Some(1500));
    assert_eq!(truncate_number(&json!(0.99)), Some(0));
    assert_eq!(truncate_number(&json!(-2.9)), Some(-2));
    assert_eq!(truncate_number(&json!("42.5")), Some(42));

    assert_eq!(truncate_number(&json!("loud")), None);
    assert_eq!(truncate_number(&json!(true)), None);
    assert_eq!(truncate_number(&Value::Null), None);
    assert_eq!(truncate_number(&json!(1e300)), None);
}

#[test]
fn test_frontend_redirect() {
    let frontend = Url::parse("http://localhost:5173").unwrap();

    assert_eq!(
        frontend_redirect(&frontend, &[("error", "access_denied")]),
        "http://localhost:5173/?error=access_denied"
    );
    assert_eq!(
        frontend_redirect(&frontend, &[("access_token", "T"), ("refresh_token", "R")]),
        "http://localhost:5173/?access_token=T&refresh_token=R"
    );
}

#[test]
fn test_frontend_redirect_encodes_values_and_drops_path() {
    let frontend = Url::parse("https://app.example.com/player?tab=1#top").unwrap();

    assert_eq!(
        frontend_redirect(&frontend, &[("access_token", "a b&c")]),
        "https://app.example.com/?access_token=a+b%26c"
    );
}

#[test]
fn test_api_endpoint() {
    let base = Url::parse("https://api.spotify.com/v1").unwrap();
    assert_eq!(
        api_endpoint(&base, "/me/player"),
        "https://api.spotify.com/v1/me/player"
    );

    let with_slash = Url::parse("https://api.spotify.com/v1/").unwrap();
    assert_eq!(
        api_endpoint(&with_slash, "search"),
        "https://api.spotify.com/v1/search"
    );
}

#[test]
fn test_call_builder() {
    let call = Call::get("/search")
        .query("q", "daft punk")
        .query("limit", 20)
        .query_opt("offset", None::<u32>)
        .query_opt("market", Some("SE"));

    assert_eq!(call.method, Method::GET);
    assert_eq!(call.path, "/search");
    assert_eq!(
        call.query,
        vec![
            ("q".to_string(), "daft punk".to_string()),
            ("limit".to_string(), "20".to_string()),
            ("market".to_string(), "SE".to_string()),
        ]
    );
    assert_eq!(call.body, None);

    let play = Call::put("/me/player/play").json(&play_payload(Some("spotify:track:1")));
    assert_eq!(play.body, Some(json!({ "uris": ["spotify:track:1"] })));
}

#[test]
fn test_callback_params() {
    let params = callback_params(Some("code=abc123&state=xyz"));
    assert_eq!(params.code.as_deref(), Some("abc123"));
    assert_eq!(params.error, None);

    // Missing query reads as empty
    assert_eq!(callback_params(None), CallbackParams::default());
    assert_eq!(callback_params(Some("")), CallbackParams::default());
}

#[test]
fn test_callback_params_repeated_keys_keep_first_value() {
    let params = callback_params(Some("error=access_denied&error=other&code=a&code=b"));
    assert_eq!(params.error.as_deref(), Some("access_denied"));
    assert_eq!(params.code.as_deref(), Some("a"));
}

#[test]
fn test_callback_params_decodes_values() {
    let params = callback_params(Some("error=server%20error+here"));
    assert_eq!(params.error.as_deref(), Some("server error here"));
}
