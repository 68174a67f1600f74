use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Opaque signed credential binding a subject to its claims.
///
/// Pass-through value: minted by the external trust authority, handed to
/// the client, never decoded or inspected here. Only the authority's
/// verification key can vouch for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability to mint signed tokens.
///
/// The signing key lives with the external trust authority, so minting
/// is an injected capability rather than a local operation. This seam is
/// also what lets the core run against a deterministic in-process minter
/// under test.
#[async_trait::async_trait]
pub trait TokenMinter: Send + Sync {
    async fn mint(&self, subject: &str, claims: &Claims) -> Result<Token, IssuanceError>;
}

/// Deterministic minter for tests and local development.
///
/// Healthy instances return a stable token derived from the subject;
/// faulty ones fail every call with a fixed cause.
pub struct StaticMinter {
    fault: Option<String>,
}

impl StaticMinter {
    pub fn healthy() -> Self {
        Self { fault: None }
    }
    pub fn faulty(cause: &str) -> Self {
        Self {
            fault: Some(cause.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl TokenMinter for StaticMinter {
    async fn mint(&self, subject: &str, _: &Claims) -> Result<Token, IssuanceError> {
        match &self.fault {
            Some(cause) => Err(IssuanceError::Internal(cause.clone())),
            None => Ok(Token::new(format!("minted.{}", subject))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthy_minter_returns_nonempty_token() {
        let minter = StaticMinter::healthy();
        let claims = Claims::guest("guest_1".to_string());
        let token = minter.mint("guest_1", &claims).await.expect("token");
        assert!(!token.as_str().is_empty());
    }

    #[tokio::test]
    async fn faulty_minter_reports_cause() {
        let minter = StaticMinter::faulty("quota exceeded");
        let claims = Claims::guest("guest_1".to_string());
        match minter.mint("guest_1", &claims).await {
            Err(e) => assert_eq!(e.cause(), "quota exceeded"),
            Ok(_) => panic!("fault must not produce a token"),
        }
    }
}
