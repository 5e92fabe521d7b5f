//! PostgreSQL implementation of ThankRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use portal_core::{RepoResult, ThankRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of ThankRepository
#[derive(Clone)]
pub struct PgThankRepository {
    pool: PgPool,
}

impl PgThankRepository {
    /// Create a new PgThankRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThankRepository for PgThankRepository {
    #[instrument(skip(self))]
    async fn count_since(&self, since: Option<DateTime<Utc>>) -> RepoResult<i64> {
        let (count,): (i64,) = match since {
            Some(since) => sqlx::query_as("SELECT COUNT(*) FROM thanks WHERE created_at >= $1")
                .bind(since)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?,
            None => sqlx::query_as("SELECT COUNT(*) FROM thanks")
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?,
        };

        Ok(count)
    }
}
