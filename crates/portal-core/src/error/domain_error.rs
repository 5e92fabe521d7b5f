//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Intention not found: {0}")]
    IntentionNotFound(Uuid),

    #[error("Member not found: {0}")]
    MemberNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Meeting not found: {0}")]
    MeetingNotFound(Uuid),

    #[error("Membership not found: {0}")]
    MembershipNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Rejection reason too short: minimum {min} characters")]
    ReasonTooShort { min: usize },

    // =========================================================================
    // State Machine Guard Violations
    // =========================================================================
    #[error("Intention has already been processed")]
    IntentionAlreadyProcessed,

    #[error("Membership has already been paid")]
    MembershipAlreadyPaid,

    #[error("Membership has been cancelled")]
    MembershipCancelled,

    #[error("Email already has an intention")]
    DuplicateEmail,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::IntentionNotFound(_) => "UNKNOWN_INTENTION",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MeetingNotFound(_) => "UNKNOWN_MEETING",
            Self::MembershipNotFound(_) => "UNKNOWN_MEMBERSHIP",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::ReasonTooShort { .. } => "REASON_TOO_SHORT",

            // Guards
            Self::IntentionAlreadyProcessed => "ALREADY_PROCESSED",
            Self::MembershipAlreadyPaid => "ALREADY_PAID",
            Self::MembershipCancelled => "MEMBERSHIP_CANCELLED",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::IntentionNotFound(_)
                | Self::MemberNotFound(_)
                | Self::UserNotFound(_)
                | Self::MeetingNotFound(_)
                | Self::MembershipNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmail | Self::ReasonTooShort { .. }
        )
    }

    /// Check if this is a state-machine guard violation.
    /// These surface as HTTP 400 with a distinct code, per the portal's
    /// API contract.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::IntentionAlreadyProcessed
                | Self::MembershipAlreadyPaid
                | Self::MembershipCancelled
                | Self::DuplicateEmail
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::IntentionNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_INTENTION");

        assert_eq!(DomainError::IntentionAlreadyProcessed.code(), "ALREADY_PROCESSED");
        assert_eq!(DomainError::DuplicateEmail.code(), "DUPLICATE_EMAIL");
        assert_eq!(DomainError::MembershipAlreadyPaid.code(), "ALREADY_PAID");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::MemberNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::MeetingNotFound(Uuid::nil()).is_not_found());
        assert!(!DomainError::DuplicateEmail.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::IntentionAlreadyProcessed.is_conflict());
        assert!(DomainError::DuplicateEmail.is_conflict());
        assert!(!DomainError::InvalidEmail.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ReasonTooShort { min: 10 };
        assert_eq!(
            err.to_string(),
            "Rejection reason too short: minimum 10 characters"
        );
    }
}
