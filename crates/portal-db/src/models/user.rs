//! User database model

use sqlx::FromRow;
use uuid::Uuid;

use portal_core::{DomainError, User, UserRole};

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub member_id: Option<Uuid>,
}

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = UserRole::parse(&model.role).ok_or_else(|| {
            DomainError::InternalError(format!("unknown user role: {}", model.role))
        })?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            role,
            member_id: model.member_id,
        })
    }
}
