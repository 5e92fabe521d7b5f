//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Public
//! responses expose a whitelist of fields; invite tokens and internal
//! contact details never leave the admin surface.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use portal_core::{
    Intention, IntentionStatus, Member, MemberStatus, Membership, MembershipStatus,
};

use crate::aggregate::{self, MonthlyAttendance};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response with offset-based pagination
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta {
                page,
                limit,
                total,
                total_pages: aggregate::total_pages(total, limit),
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// 1-based page number
    pub page: i64,
    /// Page size limit used
    pub limit: i64,
    /// Total rows matching the query
    pub total: i64,
    /// Total pages at this limit
    pub total_pages: i64,
}

// ============================================================================
// Intention Responses
// ============================================================================

/// Full intention view for the admin listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentionResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: IntentionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Intention> for IntentionResponse {
    fn from(intention: Intention) -> Self {
        Self {
            id: intention.id,
            name: intention.name,
            email: intention.email,
            phone: intention.phone,
            message: intention.message,
            status: intention.status,
            created_at: intention.created_at,
            updated_at: intention.updated_at,
        }
    }
}

/// Public status view of an intention. Deliberately narrower than
/// `IntentionResponse`: no phone, no message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentionStatusResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: IntentionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Intention> for IntentionStatusResponse {
    fn from(intention: Intention) -> Self {
        Self {
            id: intention.id,
            name: intention.name,
            email: intention.email,
            status: intention.status,
            created_at: intention.created_at,
            updated_at: intention.updated_at,
        }
    }
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member created by an approval, including the one-time registration link
/// when the invite flow applies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedMemberResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: MemberStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_expiry: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_user_id: Option<Uuid>,
}

/// Member list entry. No invite token, no contact internals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummaryResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: MemberStatus,
    pub joined_at: DateTime<Utc>,
}

impl From<Member> for MemberSummaryResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            status: member.status,
            joined_at: member.joined_at,
        }
    }
}

// ============================================================================
// Attendance Responses
// ============================================================================

/// Result of a meeting check-in
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    pub attendance_id: Uuid,
    pub member_id: Uuid,
    pub meeting_id: Uuid,
    pub checked_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_at: Option<DateTime<Utc>>,
}

/// Per-month attendance bucket
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucket {
    pub month: String,
    pub attended: i64,
    pub total: i64,
}

impl From<MonthlyAttendance> for MonthBucket {
    fn from(bucket: MonthlyAttendance) -> Self {
        Self {
            month: bucket.month,
            attended: bucket.attended,
            total: bucket.total,
        }
    }
}

/// One member's attendance statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatsResponse {
    pub member_id: Uuid,
    pub total_meetings: i64,
    pub attended: i64,
    pub attendance_rate: f64,
    pub by_month: Vec<MonthBucket>,
}

/// Group-wide dashboard statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatsResponse {
    pub total_members: i64,
    pub active_members: i64,
    pub average_attendance: f64,
    pub monthly_growth: f64,
    pub total_thanks: i64,
    pub monthly_thanks: i64,
}

// ============================================================================
// Membership Responses
// ============================================================================

/// Dues record view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: Uuid,
    pub member_id: Uuid,
    pub period: String,
    pub amount_cents: i64,
    pub status: MembershipStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<Membership> for MembershipResponse {
    fn from(membership: Membership) -> Self {
        Self {
            id: membership.id,
            member_id: membership.member_id,
            period: membership.period,
            amount_cents: membership.amount_cents,
            status: membership.status,
            paid_at: membership.paid_at,
            payment_method: membership.payment_method,
            notes: membership.notes,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
