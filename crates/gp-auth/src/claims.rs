use serde::Deserialize;
use serde::Serialize;

/// Subject role asserted in a claim set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Member,
}

/// Claim set bound into an issued token.
///
/// Immutable once constructed; the trust authority embeds it verbatim.
/// Guest claims are always `role = "guest"`, `isAnonymous = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    #[serde(rename = "isAnonymous")]
    pub anonymous: bool,
    pub iat: i64,
}

impl Claims {
    pub fn guest(subject: String) -> Self {
        Self {
            sub: subject,
            role: Role::Guest,
            anonymous: true,
            iat: Self::now(),
        }
    }
    pub fn member(subject: String) -> Self {
        Self {
            sub: subject,
            role: Role::Member,
            anonymous: false,
            iat: Self::now(),
        }
    }
    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64
    }
}
