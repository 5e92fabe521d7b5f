//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::{Member, MemberPage, MemberRepository, MemberStatus, RepoResult};

use crate::models::MemberModel;

use super::error::map_db_error;

const MEMBER_COLUMNS: &str = "id, name, email, phone, company, position, status, invite_token, \
                              token_expiry, intention_id, joined_at, updated_at, deleted_at";

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE email = $1 AND deleted_at IS NULL"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<MemberPage> {
        let models = sqlx::query_as::<_, MemberModel>(&format!(
            r"
            SELECT {MEMBER_COLUMNS}
            FROM members
            WHERE deleted_at IS NULL
            ORDER BY joined_at DESC
            LIMIT $1 OFFSET $2
            "
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM members WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        let members = models
            .into_iter()
            .map(Member::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MemberPage { members, total })
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM members WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_active(&self) -> RepoResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM members WHERE status = $1 AND deleted_at IS NULL",
        )
        .bind(MemberStatus::Active.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_active_joined_before(&self, cutoff: DateTime<Utc>) -> RepoResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            r"
            SELECT COUNT(*)
            FROM members
            WHERE status = $1 AND joined_at < $2 AND deleted_at IS NULL
            ",
        )
        .bind(MemberStatus::Active.as_str())
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
