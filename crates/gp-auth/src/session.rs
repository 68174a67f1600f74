use super::*;

/// Where a client-side identity session currently sits.
///
/// Expiry and revocation are governed entirely by the external trust
/// authority; the states exist here so callers can reflect transitions
/// the identity layer reports, not so this core can enforce a policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    NoIdentity,
    IssuancePending,
    Established(User),
    Expired,
    Revoked,
}

/// Explicit session context for the access gate.
///
/// Passed to the gate rather than observed ambiently, so the decision
/// stays a pure function of its input. Created on guest issuance or
/// sign-in, torn down on sign-out or expiry. Out-of-order transitions
/// are no-ops; the session never panics and never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn state(&self) -> &SessionState {
        &self.state
    }
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Established(user) => Some(user),
            _ => None,
        }
    }
    /// A session request entered flight.
    pub fn request(&mut self) {
        if let SessionState::NoIdentity = self.state {
            self.state = SessionState::IssuancePending;
        }
    }
    /// A successful issuance reflected into the session.
    pub fn establish(&mut self, user: User) {
        if let SessionState::IssuancePending = self.state {
            self.state = SessionState::Established(user);
        }
    }
    /// A failed issuance: nothing partial survives.
    pub fn fail(&mut self) {
        if let SessionState::IssuancePending = self.state {
            self.state = SessionState::NoIdentity;
        }
    }
    /// The external identity layer reported expiry.
    pub fn expire(&mut self) {
        if let SessionState::Established(_) = self.state {
            self.state = SessionState::Expired;
        }
    }
    /// The external identity layer reported revocation.
    pub fn revoke(&mut self) {
        if let SessionState::Established(_) = self.state {
            self.state = SessionState::Revoked;
        }
    }
    /// Tear-down; terminal states return here before a new request.
    pub fn reset(&mut self) {
        self.state = SessionState::NoIdentity;
    }
    pub fn permitted(&self) -> bool {
        Access::from(self).permitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_holds_no_identity() {
        let session = Session::new();
        assert_eq!(session.state(), &SessionState::NoIdentity);
        assert!(session.user().is_none());
    }

    #[test]
    fn issuance_success_establishes() {
        let mut session = Session::new();
        session.request();
        session.establish(User::from(Guest::generate()));
        assert!(session.permitted());
        assert!(session.user().expect("established").anonymous());
    }

    #[test]
    fn issuance_failure_leaves_no_partial_state() {
        let mut session = Session::new();
        session.request();
        session.fail();
        assert_eq!(session.state(), &SessionState::NoIdentity);
        assert!(!session.permitted());
    }

    #[test]
    fn establishment_requires_a_pending_request() {
        let mut session = Session::new();
        session.establish(User::from(Guest::generate()));
        assert_eq!(session.state(), &SessionState::NoIdentity);
    }

    #[test]
    fn expiry_and_revocation_tear_down_access() {
        let mut expired = Session::new();
        expired.request();
        expired.establish(User::from(Guest::generate()));
        expired.expire();
        assert!(!expired.permitted());

        let mut revoked = Session::new();
        revoked.request();
        revoked.establish(User::from(Guest::generate()));
        revoked.revoke();
        assert!(!revoked.permitted());
    }

    #[test]
    fn reset_returns_to_no_identity_from_anywhere() {
        let mut session = Session::new();
        session.request();
        session.establish(User::from(Guest::generate()));
        session.expire();
        session.reset();
        assert_eq!(session.state(), &SessionState::NoIdentity);
        session.request();
        assert_eq!(session.state(), &SessionState::IssuancePending);
    }
}
