/// The only failure the identity core defines.
///
/// Wraps whatever the trust authority reported. Every variant is
/// non-fatal and safe to retry: a failed issuance persists nothing, so
/// the visitor can simply ask again.
#[derive(Debug)]
pub enum IssuanceError {
    /// The trust authority could not be reached (connect, timeout).
    Unreachable(String),
    /// The authority refused the request (malformed claims, quota, empty subject).
    Rejected(String),
    /// Any other authority-side or transport fault.
    Internal(String),
}

impl IssuanceError {
    /// Underlying cause, for diagnostics.
    pub fn cause(&self) -> &str {
        match self {
            Self::Unreachable(cause) => cause,
            Self::Rejected(cause) => cause,
            Self::Internal(cause) => cause,
        }
    }
}

impl std::fmt::Display for IssuanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable(cause) => write!(f, "trust authority unreachable: {}", cause),
            Self::Rejected(cause) => write!(f, "issuance rejected: {}", cause),
            Self::Internal(cause) => write!(f, "issuance failed: {}", cause),
        }
    }
}

impl std::error::Error for IssuanceError {}
