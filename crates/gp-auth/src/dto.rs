use serde::Deserialize;
use serde::Serialize;

/// Body of a successful guest-session response.
#[derive(Debug, Serialize, Deserialize)]
pub struct GuestSessionResponse {
    pub token: String,
}
