//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Intention Requests
// ============================================================================

/// Public membership application
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitIntentionRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 1000, message = "Message must be at most 1000 characters"))]
    pub message: Option<String>,
}

/// Approve a pending intention
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApproveIntentionRequest {
    pub intention_id: Uuid,
}

/// Reject a pending intention with a reason for the applicant
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RejectIntentionRequest {
    pub intention_id: Uuid,

    #[validate(length(min = 10, max = 500, message = "Reason must be 10-500 characters"))]
    pub reason: String,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// Check a member in to a meeting
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub member_id: Uuid,
}

// ============================================================================
// Membership Requests
// ============================================================================

/// Record a dues payment
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PayMembershipRequest {
    /// Payment timestamp; defaults to now when omitted
    pub paid_at: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 50, message = "Payment method must be 1-50 characters"))]
    pub payment_method: String,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}
