use super::*;

/// Outcome of the access gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Permit,
    Deny,
}

impl Access {
    pub fn permitted(&self) -> bool {
        matches!(self, Self::Permit)
    }
}

/// The gate itself: a total, synchronous predicate over the session.
///
/// Any established identity permits, guest or registered alike; every
/// other state denies, including indeterminate ones. It never errors and
/// carries no transition logic of its own.
impl From<&Session> for Access {
    fn from(session: &Session) -> Self {
        match session.state() {
            SessionState::Established(_) => Self::Permit,
            _ => Self::Deny,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denies_without_identity() {
        assert_eq!(Access::from(&Session::new()), Access::Deny);
    }

    #[test]
    fn denies_while_issuance_is_in_flight() {
        let mut session = Session::new();
        session.request();
        assert_eq!(Access::from(&session), Access::Deny);
    }

    #[test]
    fn permits_any_established_identity() {
        let mut guest = Session::new();
        guest.request();
        guest.establish(User::from(Guest::generate()));
        assert_eq!(Access::from(&guest), Access::Permit);

        let mut member = Session::new();
        member.request();
        member.establish(User::from(Member::new(Default::default(), "ada".to_string())));
        assert_eq!(Access::from(&member), Access::Permit);
    }
}
