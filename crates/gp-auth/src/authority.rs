use super::*;
use serde::Deserialize;
use serde::Serialize;

/// HTTP client for the external trust authority.
///
/// The authority holds the signing key; this client only carries the
/// mint request across the wire and hands back the opaque token. The
/// call here is the core's one suspension point and its only I/O.
pub struct RemoteAuthority {
    client: reqwest::Client,
    url: String,
    key: Option<String>,
}

#[derive(Serialize)]
struct MintRequest<'a> {
    subject: &'a str,
    claims: &'a Claims,
}

#[derive(Deserialize)]
struct MintResponse {
    token: String,
}

impl RemoteAuthority {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            key: None,
        }
    }
    /// Reads `AUTHORITY_URL` and the optional `AUTHORITY_KEY` bearer
    /// credential from the environment.
    pub fn from_env() -> Self {
        Self {
            client: reqwest::Client::new(),
            url: std::env::var("AUTHORITY_URL").expect("AUTHORITY_URL must be set"),
            key: std::env::var("AUTHORITY_KEY").ok(),
        }
    }
}

#[async_trait::async_trait]
impl TokenMinter for RemoteAuthority {
    async fn mint(&self, subject: &str, claims: &Claims) -> Result<Token, IssuanceError> {
        let request = self
            .client
            .post(format!("{}/mint", self.url))
            .json(&MintRequest { subject, claims });
        let request = match &self.key {
            Some(key) => request.bearer_auth(key),
            None => request,
        };
        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                IssuanceError::Unreachable(e.to_string())
            } else {
                IssuanceError::Internal(e.to_string())
            }
        })?;
        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(IssuanceError::Rejected(format!("{}: {}", status, body)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IssuanceError::Internal(format!("{}: {}", status, body)));
        }
        response
            .json::<MintResponse>()
            .await
            .map(|r| Token::new(r.token))
            .map_err(|e| IssuanceError::Internal(e.to_string()))
    }
}
