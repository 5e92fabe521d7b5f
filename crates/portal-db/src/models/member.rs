//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use portal_core::{DomainError, Member, MemberStatus};

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: String,
    pub invite_token: Option<String>,
    pub token_expiry: Option<DateTime<Utc>>,
    pub intention_id: Option<Uuid>,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl MemberModel {
    /// Check if the member is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl TryFrom<MemberModel> for Member {
    type Error = DomainError;

    fn try_from(model: MemberModel) -> Result<Self, Self::Error> {
        let status = MemberStatus::parse(&model.status).ok_or_else(|| {
            DomainError::InternalError(format!("unknown member status: {}", model.status))
        })?;

        Ok(Member {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            company: model.company,
            position: model.position,
            status,
            invite_token: model.invite_token,
            token_expiry: model.token_expiry,
            intention_id: model.intention_id,
            joined_at: model.joined_at,
            updated_at: model.updated_at,
        })
    }
}
