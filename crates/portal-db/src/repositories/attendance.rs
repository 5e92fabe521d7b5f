//! PostgreSQL implementation of AttendanceRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::{Attendance, AttendanceRepository, MemberAttendance, RepoResult};

use crate::models::{AttendanceModel, MemberAttendanceRow};

use super::error::map_db_error;

/// PostgreSQL implementation of AttendanceRepository
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    /// Create a new PgAttendanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    #[instrument(skip(self))]
    async fn check_in(&self, member_id: Uuid, meeting_id: Uuid) -> RepoResult<Attendance> {
        // Upsert on the (member_id, meeting_id) unique constraint keeps
        // check-in idempotent without a prior read
        let model = sqlx::query_as::<_, AttendanceModel>(
            r"
            INSERT INTO attendances (id, member_id, meeting_id, checked_in, check_in_at)
            VALUES ($1, $2, $3, TRUE, NOW())
            ON CONFLICT (member_id, meeting_id)
            DO UPDATE SET checked_in = TRUE, check_in_at = NOW()
            RETURNING id, member_id, meeting_id, checked_in, check_in_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(member_id)
        .bind(meeting_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Attendance::from(model))
    }

    #[instrument(skip(self))]
    async fn find_for_member(
        &self,
        member_id: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<MemberAttendance>> {
        let rows = match since {
            Some(since) => {
                sqlx::query_as::<_, MemberAttendanceRow>(
                    r"
                    SELECT m.date AS meeting_date, a.checked_in
                    FROM attendances a
                    JOIN meetings m ON m.id = a.meeting_id
                    WHERE a.member_id = $1 AND m.date >= $2
                    ORDER BY m.date
                    ",
                )
                .bind(member_id)
                .bind(since)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, MemberAttendanceRow>(
                    r"
                    SELECT m.date AS meeting_date, a.checked_in
                    FROM attendances a
                    JOIN meetings m ON m.id = a.meeting_id
                    WHERE a.member_id = $1
                    ORDER BY m.date
                    ",
                )
                .bind(member_id)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MemberAttendance::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_checked_in(&self) -> RepoResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM attendances WHERE checked_in = TRUE")
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }
}
