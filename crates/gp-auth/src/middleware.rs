use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use std::future::Ready;

fn bearer(req: &HttpRequest) -> Option<Token> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(|t| Token::new(t.to_string()))
}

/// Extractor admitting only requests that carry an established identity.
///
/// Presence-only: the credential stays opaque here, and verifying it is
/// the external trust authority's business. Guests and registered
/// members pass identically; anything indeterminate is a denial, never
/// an error surfaced to the handler.
pub struct Presence(pub Token);

impl Presence {
    pub fn token(&self) -> &Token {
        &self.0
    }
}

impl FromRequest for Presence {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(
            bearer(req)
                .map(Self)
                .ok_or_else(|| actix_web::error::ErrorUnauthorized("no established identity")),
        )
    }
}

/// Non-failing variant: hands the handler the access decision instead.
pub struct MaybePresence(pub Option<Token>);

impl MaybePresence {
    pub fn decision(&self) -> Access {
        match self.0 {
            Some(_) => Access::Permit,
            None => Access::Deny,
        }
    }
}

impl FromRequest for MaybePresence {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(Ok(Self(bearer(req))))
    }
}
