//! Membership (dues) entity with its own small state machine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dues status. Transitions: Pending→Paid, Pending→Overdue, any→Cancelled.
/// A Paid membership cannot be paid again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Overdue => "OVERDUE",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "PAID" => Some(Self::Paid),
            "OVERDUE" => Some(Self::Overdue),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Pending and Overdue dues are payable; Paid and Cancelled are not
    #[inline]
    pub fn is_payable(&self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }
}

/// Membership dues record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub id: Uuid,
    pub member_id: Uuid,
    /// Billing period, e.g. "2026-08"
    pub period: String,
    pub amount_cents: i64,
    pub status: MembershipStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Membership {
    pub fn new(member_id: Uuid, period: impl Into<String>, amount_cents: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            member_id,
            period: period.into(),
            amount_cents,
            status: MembershipStatus::Pending,
            paid_at: None,
            payment_method: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}
