//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Guarded state transitions (approve, reject,
//! pay, check-in) are single port methods so the read+guard+write runs
//! inside one store transaction; callers never issue a separate status read
//! followed by a status write.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Attendance, Intention, IntentionStatus, Meeting, Member, Membership};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Intention Repository
// ============================================================================

/// Invite credentials issued for the member created during approval
#[derive(Debug, Clone)]
pub struct MemberSeed {
    pub invite_token: String,
    pub token_expiry: DateTime<Utc>,
}

/// Result of an approval transaction
#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    /// The member row created inside the transaction
    pub member: Member,
    /// The existing user account linked to the member, if one matched the
    /// intention's email
    pub linked_user_id: Option<Uuid>,
}

/// One page of intentions plus the unfiltered total for the same query
#[derive(Debug, Clone)]
pub struct IntentionPage {
    pub intentions: Vec<Intention>,
    pub total: i64,
}

#[async_trait]
pub trait IntentionRepository: Send + Sync {
    /// Find intention by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Intention>>;

    /// Find the most recent non-deleted intention for an email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Intention>>;

    /// Create a new intention.
    /// Returns `DomainError::DuplicateEmail` when a non-deleted intention
    /// already exists for the email (unique-violation mapping, no
    /// read-then-write race).
    async fn create(&self, intention: &Intention) -> RepoResult<()>;

    /// List intentions with offset pagination and optional status filter
    async fn list(
        &self,
        status: Option<IntentionStatus>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<IntentionPage>;

    /// Approve a pending intention as one atomic transaction:
    /// guard PENDING, flip to APPROVED, create the member (INVITED with the
    /// seed's invite token, or ACTIVE when a user account matches the
    /// email), and link that user. All-or-nothing.
    ///
    /// Errors: `IntentionNotFound`, `IntentionAlreadyProcessed`.
    async fn approve_pending(&self, id: Uuid, seed: &MemberSeed) -> RepoResult<ApprovalOutcome>;

    /// Reject a pending intention as one atomic transaction:
    /// guard PENDING, flip to REJECTED. Returns the updated intention.
    ///
    /// Errors: `IntentionNotFound`, `IntentionAlreadyProcessed`.
    async fn reject_pending(&self, id: Uuid) -> RepoResult<Intention>;
}

// ============================================================================
// Member Repository
// ============================================================================

/// One page of members plus the total count
#[derive(Debug, Clone)]
pub struct MemberPage {
    pub members: Vec<Member>,
    pub total: i64,
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>>;

    /// Find member by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>>;

    /// List members with offset pagination
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<MemberPage>;

    /// Count all non-deleted members
    async fn count(&self) -> RepoResult<i64>;

    /// Count ACTIVE members
    async fn count_active(&self) -> RepoResult<i64>;

    /// Count ACTIVE members who joined before the cutoff
    async fn count_active_joined_before(&self, cutoff: DateTime<Utc>) -> RepoResult<i64>;
}

// ============================================================================
// Meeting Repository
// ============================================================================

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Find meeting by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Meeting>>;

    /// Count meetings, optionally only those on or after `since`
    async fn count_since(&self, since: Option<DateTime<Utc>>) -> RepoResult<i64>;
}

// ============================================================================
// Attendance Repository
// ============================================================================

/// An attendance row joined with its meeting's date, the input shape for
/// month bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberAttendance {
    pub meeting_date: DateTime<Utc>,
    pub checked_in: bool,
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Idempotent check-in: create the (member, meeting) row with
    /// checked_in = true, or update the existing row and refresh
    /// check_in_at. One atomic statement, never a duplicate pair.
    async fn check_in(&self, member_id: Uuid, meeting_id: Uuid) -> RepoResult<Attendance>;

    /// Fetch a member's attendance rows joined with meeting dates,
    /// optionally restricted to meetings on or after `since`
    async fn find_for_member(
        &self,
        member_id: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<MemberAttendance>>;

    /// Count checked-in attendance rows across all members
    async fn count_checked_in(&self) -> RepoResult<i64>;
}

// ============================================================================
// Thank Repository
// ============================================================================

#[async_trait]
pub trait ThankRepository: Send + Sync {
    /// Count thanks, optionally only those created on or after `since`
    async fn count_since(&self, since: Option<DateTime<Utc>>) -> RepoResult<i64>;
}

// ============================================================================
// Membership Repository
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Find membership by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Membership>>;

    /// Guarded payment transition (Pending/Overdue → Paid), atomic.
    ///
    /// Errors: `MembershipNotFound`, `MembershipAlreadyPaid`,
    /// `MembershipCancelled`.
    async fn mark_paid(
        &self,
        id: Uuid,
        paid_at: DateTime<Utc>,
        payment_method: &str,
        notes: Option<&str>,
    ) -> RepoResult<Membership>;

    /// Guarded overdue transition (Pending → Overdue), atomic
    async fn mark_overdue(&self, id: Uuid) -> RepoResult<Membership>;

    /// Cancel a membership (any non-cancelled state), atomic
    async fn cancel(&self, id: Uuid) -> RepoResult<Membership>;
}
