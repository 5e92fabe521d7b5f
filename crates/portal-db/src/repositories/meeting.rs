//! PostgreSQL implementation of MeetingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::{Meeting, MeetingRepository, RepoResult};

use crate::models::MeetingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MeetingRepository
#[derive(Clone)]
pub struct PgMeetingRepository {
    pool: PgPool,
}

impl PgMeetingRepository {
    /// Create a new PgMeetingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingRepository for PgMeetingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Meeting>> {
        let result = sqlx::query_as::<_, MeetingModel>(
            r"
            SELECT id, title, date, meeting_type, location, description
            FROM meetings
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Meeting::from))
    }

    #[instrument(skip(self))]
    async fn count_since(&self, since: Option<DateTime<Utc>>) -> RepoResult<i64> {
        let (count,): (i64,) = match since {
            Some(since) => sqlx::query_as("SELECT COUNT(*) FROM meetings WHERE date >= $1")
                .bind(since)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?,
            None => sqlx::query_as("SELECT COUNT(*) FROM meetings")
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?,
        };

        Ok(count)
    }
}
