//! Error handling utilities for repositories

use portal_core::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create an "intention not found" error
pub fn intention_not_found(id: Uuid) -> DomainError {
    DomainError::IntentionNotFound(id)
}

/// Create a "member not found" error
pub fn member_not_found(id: Uuid) -> DomainError {
    DomainError::MemberNotFound(id)
}

/// Create a "meeting not found" error
pub fn meeting_not_found(id: Uuid) -> DomainError {
    DomainError::MeetingNotFound(id)
}

/// Create a "membership not found" error
pub fn membership_not_found(id: Uuid) -> DomainError {
    DomainError::MembershipNotFound(id)
}
