//! Member entity - an admitted person with a portal profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatus {
    Invited,
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invited => "INVITED",
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "INVITED" => Some(Self::Invited),
            "ACTIVE" => Some(Self::Active),
            "INACTIVE" => Some(Self::Inactive),
            "SUSPENDED" => Some(Self::Suspended),
            _ => None,
        }
    }
}

/// Member entity. Created exactly once per approved intention; the
/// `intention_id` back-reference is advisory, not ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: MemberStatus,
    pub invite_token: Option<String>,
    pub token_expiry: Option<DateTime<Utc>>,
    pub intention_id: Option<Uuid>,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Create an invited member carrying a one-time invite token
    pub fn invited(
        name: impl Into<String>,
        email: impl Into<String>,
        invite_token: String,
        token_expiry: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
            position: None,
            status: MemberStatus::Invited,
            invite_token: Some(invite_token),
            token_expiry: Some(token_expiry),
            intention_id: None,
            joined_at: now,
            updated_at: now,
        }
    }

    /// Create an already-active member (linked to an existing user account)
    pub fn active(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
            position: None,
            status: MemberStatus::Active,
            invite_token: None,
            token_expiry: None,
            intention_id: None,
            joined_at: now,
            updated_at: now,
        }
    }

    pub fn with_intention(mut self, intention_id: Uuid) -> Self {
        self.intention_id = Some(intention_id);
        self
    }

    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Whether the invite token is still valid at `now`.
    /// Consumption and expiry are independent invalidation paths: a consumed
    /// token is cleared from the row, an expired one fails this check.
    pub fn token_valid_at(&self, now: DateTime<Utc>) -> bool {
        match (&self.invite_token, self.token_expiry) {
            (Some(_), Some(expiry)) => now < expiry,
            _ => false,
        }
    }

    /// Complete registration: consume the invite token and activate
    pub fn activate(&mut self) {
        self.status = MemberStatus::Active;
        self.invite_token = None;
        self.token_expiry = None;
        self.updated_at = Utc::now();
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}
