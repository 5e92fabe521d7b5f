//! Group statistics service
//!
//! Assembles the dashboard numbers from repository counts and the
//! aggregation primitives.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use tracing::instrument;

use crate::aggregate;
use crate::dto::GroupStatsResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Group statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Group-wide dashboard statistics.
    /// Growth compares the active headcount now against the start of the
    /// current calendar month; "monthly" thank counts use the same cutoff.
    #[instrument(skip(self))]
    pub async fn group_stats(&self) -> ServiceResult<GroupStatsResponse> {
        let month_start = current_month_start()?;

        let total_members = self.ctx.member_repo().count().await?;
        let active_members = self.ctx.member_repo().count_active().await?;
        let active_at_month_start = self
            .ctx
            .member_repo()
            .count_active_joined_before(month_start)
            .await?;

        let total_meetings = self.ctx.meeting_repo().count_since(None).await?;
        let checked_in = self.ctx.attendance_repo().count_checked_in().await?;

        let total_thanks = self.ctx.thank_repo().count_since(None).await?;
        let monthly_thanks = self.ctx.thank_repo().count_since(Some(month_start)).await?;

        Ok(GroupStatsResponse {
            total_members,
            active_members,
            average_attendance: aggregate::average_attendance(
                checked_in,
                total_meetings,
                active_members,
            ),
            monthly_growth: aggregate::monthly_growth(active_members, active_at_month_start),
            total_thanks,
            monthly_thanks,
        })
    }
}

/// Midnight UTC on the first day of the current month
fn current_month_start() -> ServiceResult<DateTime<Utc>> {
    let now = Utc::now();
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .ok_or_else(|| ServiceError::internal("failed to compute month boundary"))
}
