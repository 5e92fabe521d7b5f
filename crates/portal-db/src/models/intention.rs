//! Intention database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use portal_core::{DomainError, Intention, IntentionStatus};

/// Database model for the intentions table
#[derive(Debug, Clone, FromRow)]
pub struct IntentionModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl IntentionModel {
    /// Check if the intention is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl TryFrom<IntentionModel> for Intention {
    type Error = DomainError;

    fn try_from(model: IntentionModel) -> Result<Self, Self::Error> {
        let status = IntentionStatus::parse(&model.status).ok_or_else(|| {
            DomainError::InternalError(format!("unknown intention status: {}", model.status))
        })?;

        Ok(Intention {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            message: model.message,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
