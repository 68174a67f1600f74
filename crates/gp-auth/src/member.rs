use gp_core::ID;
use gp_core::Unique;

/// Registered identity, as far as this core cares about one.
///
/// Only what the gate needs to treat members and guests uniformly;
/// credentials, persistence, and account management live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    id: ID<Self>,
    username: String,
}

impl Member {
    pub fn new(id: ID<Self>, username: String) -> Self {
        Self { id, username }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    /// Subject string for registered identities: the bare id, outside
    /// the guest namespace.
    pub fn subject(&self) -> String {
        self.id.to_string()
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
