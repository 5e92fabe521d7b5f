//! Attendance service
//!
//! Meeting check-in and per-member attendance statistics.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use portal_core::DomainError;

use crate::aggregate;
use crate::dto::{AttendanceStatsResponse, CheckInRequest, CheckInResponse, MonthBucket};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check a member in to a meeting. Repeating the call for the same
    /// pair refreshes the check-in timestamp and changes nothing else.
    #[instrument(skip(self, request), fields(member_id = %request.member_id))]
    pub async fn check_in(
        &self,
        meeting_id: Uuid,
        request: CheckInRequest,
    ) -> ServiceResult<CheckInResponse> {
        self.ctx
            .meeting_repo()
            .find_by_id(meeting_id)
            .await?
            .ok_or(DomainError::MeetingNotFound(meeting_id))?;

        self.ctx
            .member_repo()
            .find_by_id(request.member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(request.member_id))?;

        let attendance = self
            .ctx
            .attendance_repo()
            .check_in(request.member_id, meeting_id)
            .await?;

        info!(
            member_id = %attendance.member_id,
            meeting_id = %attendance.meeting_id,
            "Member checked in"
        );

        Ok(CheckInResponse {
            attendance_id: attendance.id,
            member_id: attendance.member_id,
            meeting_id: attendance.meeting_id,
            checked_in: attendance.checked_in,
            check_in_at: attendance.check_in_at,
        })
    }

    /// Attendance statistics for one member, optionally restricted to
    /// meetings on or after `since`
    #[instrument(skip(self))]
    pub async fn member_stats(
        &self,
        member_id: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> ServiceResult<AttendanceStatsResponse> {
        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(member_id))?;

        let total_meetings = self.ctx.meeting_repo().count_since(since).await?;
        let rows = self
            .ctx
            .attendance_repo()
            .find_for_member(member_id, since)
            .await?;

        let attended = rows.iter().filter(|r| r.checked_in).count() as i64;
        let by_month = aggregate::bucket_by_month(&rows)
            .into_iter()
            .map(MonthBucket::from)
            .collect();

        Ok(AttendanceStatsResponse {
            member_id,
            total_meetings,
            attended,
            attendance_rate: aggregate::attendance_rate(attended, total_meetings),
            by_month,
        })
    }
}
