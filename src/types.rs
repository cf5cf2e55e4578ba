use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful response of the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: u64,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub market: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistsParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayRequest {
    pub uri: Option<String>,
    pub device_id: Option<String>,
}

/// Body sent to the upstream play endpoint. Serializes to `{}` when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeekRequest {
    pub position_ms: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeRequest {
    pub volume_percent: Option<Value>,
}
