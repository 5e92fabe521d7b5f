//! Test fixtures and data generators
//!
//! Provides reusable test data and wire-format bodies for integration
//! tests. Response structs mirror the camelCase JSON the API emits.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Membership application body
#[derive(Debug, Serialize)]
pub struct SubmitIntentionBody {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmitIntentionBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let nonce = Uuid::new_v4().simple();
        Self {
            name: format!("Test Applicant {suffix}"),
            email: format!("applicant-{nonce}@example.com"),
            phone: Some("010-1234-5678".to_string()),
            message: Some("Referred by a friend".to_string()),
        }
    }
}

/// Approval body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveBody {
    pub intention_id: Uuid,
}

/// Rejection body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectBody {
    pub intention_id: Uuid,
    pub reason: String,
}

/// Check-in body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInBody {
    pub member_id: Uuid,
}

/// Intention as returned by the public endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentionBody {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: String,
}

/// `{intention: {...}}` envelope
#[derive(Debug, Deserialize)]
pub struct IntentionEnvelope {
    pub intention: IntentionBody,
}

/// `{intentions: [...], pagination: {...}}` envelope
#[derive(Debug, Deserialize)]
pub struct IntentionListEnvelope {
    pub intentions: Vec<serde_json::Value>,
    pub pagination: PaginationBody,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBody {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Member created by an approval
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedMemberBody {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: String,
    pub invite_token: Option<String>,
    pub registration_url: Option<String>,
    pub linked_user_id: Option<Uuid>,
}

/// `{message, member: {...}}` envelope
#[derive(Debug, Deserialize)]
pub struct ApprovalEnvelope {
    pub message: String,
    pub member: ApprovedMemberBody,
}

/// `{stats: {...}}` envelope for the group dashboard
#[derive(Debug, Deserialize)]
pub struct GroupStatsEnvelope {
    pub stats: GroupStatsBody,
}

/// Group dashboard numbers
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatsBody {
    pub total_members: i64,
    pub active_members: i64,
    pub average_attendance: f64,
    pub monthly_growth: f64,
    pub total_thanks: i64,
    pub monthly_thanks: i64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
