//! Membership database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use portal_core::{DomainError, Membership, MembershipStatus};

/// Database model for the memberships table
#[derive(Debug, Clone, FromRow)]
pub struct MembershipModel {
    pub id: Uuid,
    pub member_id: Uuid,
    pub period: String,
    pub amount_cents: i64,
    pub status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<MembershipModel> for Membership {
    type Error = DomainError;

    fn try_from(model: MembershipModel) -> Result<Self, Self::Error> {
        let status = MembershipStatus::parse(&model.status).ok_or_else(|| {
            DomainError::InternalError(format!("unknown membership status: {}", model.status))
        })?;

        Ok(Membership {
            id: model.id,
            member_id: model.member_id,
            period: model.period,
            amount_cents: model.amount_cents,
            status,
            paid_at: model.paid_at,
            payment_method: model.payment_method,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
