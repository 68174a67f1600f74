use super::*;

/// Any established identity: anonymous guest or registered member.
///
/// The access gate does not distinguish between the two; the variant
/// only matters to consumers that inspect the subject namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum User {
    Guest(Guest),
    Member(Member),
}

impl User {
    pub fn subject(&self) -> String {
        match self {
            Self::Guest(g) => g.subject(),
            Self::Member(m) => m.subject(),
        }
    }
    pub fn anonymous(&self) -> bool {
        matches!(self, Self::Guest(_))
    }
}

impl From<Guest> for User {
    fn from(guest: Guest) -> Self {
        Self::Guest(guest)
    }
}

impl From<Member> for User {
    fn from(member: Member) -> Self {
        Self::Member(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_subjects_are_namespaced() {
        let user = User::from(Guest::generate());
        assert!(user.anonymous());
        assert!(user.subject().starts_with(GUEST_PREFIX));
    }

    #[test]
    fn member_subjects_are_not() {
        let user = User::from(Member::new(Default::default(), "ada".to_string()));
        assert!(!user.anonymous());
        assert!(!user.subject().starts_with(GUEST_PREFIX));
    }
}
