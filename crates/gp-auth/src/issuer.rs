use super::*;
use std::sync::Arc;

/// Front door of the identity core.
///
/// Validates the subject, then performs the single authority call. No
/// retry, no caching, no deduplication: every call mints a fresh token,
/// and repeated issuance is always safe since each guest identity is
/// independent. Nothing is persisted before the token is returned, so an
/// abandoned or failed call leaves no partial state.
#[derive(Clone)]
pub struct Issuer {
    minter: Arc<dyn TokenMinter>,
}

impl Issuer {
    pub fn new(minter: Arc<dyn TokenMinter>) -> Self {
        Self { minter }
    }

    /// Mints a token binding `subject` to `claims`.
    ///
    /// Subjects come from [`Guest::generate`] or a registered identity;
    /// the issuer never invents one, and an empty subject is rejected
    /// before any I/O.
    pub async fn issue(&self, subject: &str, claims: Claims) -> Result<Token, IssuanceError> {
        if subject.is_empty() {
            return Err(IssuanceError::Rejected("empty subject".to_string()));
        }
        self.minter.mint(subject, &claims).await
    }

    /// The composed guest flow: generate an identifier, bind guest
    /// claims to it, mint.
    pub async fn guest(&self) -> Result<(Guest, Token), IssuanceError> {
        let guest = Guest::generate();
        let subject = guest.subject();
        let token = self.issue(&subject, Claims::guest(subject.clone())).await?;
        Ok((guest, token))
    }
}
