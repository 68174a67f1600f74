use gp_core::ID;
use gp_core::Unique;

/// Namespace prefix married to every guest subject, so downstream
/// consumers can tell guest identities from registered ones by
/// inspecting the identifier alone.
pub const GUEST_PREFIX: &str = "guest_";

/// Anonymous, disposable identity for unregistered visitors.
///
/// Minted fresh per request and discarded when the session ends; no
/// server-side record is kept. Uniqueness rides on the time-ordered +
/// random identifier rather than any coordination, so generation always
/// succeeds and needs no retry or collision check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guest {
    id: ID<Guest>,
}

impl Guest {
    pub fn generate() -> Self {
        Self::default()
    }
    /// Subject string carried in issued tokens: `guest_<uuid>`.
    pub fn subject(&self) -> String {
        format!("{}{}", GUEST_PREFIX, self.id)
    }
}

impl Unique for Guest {
    fn id(&self) -> ID<Guest> {
        self.id
    }
}
