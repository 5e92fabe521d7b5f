//! User entity - an authentication account, optionally linked to a member

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portal role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Member,
    Guest,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
            Self::Guest => "GUEST",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Self::Admin),
            "MEMBER" => Some(Self::Member),
            "GUEST" => Some(Self::Guest),
            _ => None,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// User account. The `member_id` reference is weak: deleting a member does
/// not cascade here, referential integrity is the store's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub member_id: Option<Uuid>,
}

impl User {
    /// Create a new guest user (no member profile yet)
    pub fn guest(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            role: UserRole::Guest,
            member_id: None,
        }
    }

    /// Link this account to a member profile, promoting a guest to member.
    /// Admins keep their role.
    pub fn link_member(&mut self, member_id: Uuid) {
        self.member_id = Some(member_id);
        if self.role == UserRole::Guest {
            self.role = UserRole::Member;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_has_no_member() {
        let user = User::guest("Jane", "jane@example.com");
        assert_eq!(user.role, UserRole::Guest);
        assert!(user.member_id.is_none());
    }

    #[test]
    fn test_link_member_promotes_guest() {
        let mut user = User::guest("Jane", "jane@example.com");
        let member_id = Uuid::new_v4();
        user.link_member(member_id);
        assert_eq!(user.member_id, Some(member_id));
        assert_eq!(user.role, UserRole::Member);
    }

    #[test]
    fn test_link_member_keeps_admin_role() {
        let mut user = User::guest("Root", "root@example.com");
        user.role = UserRole::Admin;
        user.link_member(Uuid::new_v4());
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_role_roundtrip() {
        for role in [UserRole::Admin, UserRole::Member, UserRole::Guest] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Guest.is_admin());
    }
}
