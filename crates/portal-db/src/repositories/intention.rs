//! PostgreSQL implementation of IntentionRepository
//!
//! The admission transitions (`approve_pending`, `reject_pending`) run as
//! single database transactions: the intention row is locked, its status
//! guard is checked, and every write commits or none does.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::{
    ApprovalOutcome, DomainError, Intention, IntentionPage, IntentionRepository, IntentionStatus,
    Member, MemberSeed, RepoResult,
};

use crate::models::{IntentionModel, UserModel};

use super::error::{intention_not_found, map_db_error, map_unique_violation};

const INTENTION_COLUMNS: &str =
    "id, name, email, phone, message, status, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of IntentionRepository
#[derive(Clone)]
pub struct PgIntentionRepository {
    pool: PgPool,
}

impl PgIntentionRepository {
    /// Create a new PgIntentionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IntentionRepository for PgIntentionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Intention>> {
        let result = sqlx::query_as::<_, IntentionModel>(&format!(
            "SELECT {INTENTION_COLUMNS} FROM intentions WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Intention::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Intention>> {
        let result = sqlx::query_as::<_, IntentionModel>(&format!(
            r"
            SELECT {INTENTION_COLUMNS}
            FROM intentions
            WHERE email = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC
            LIMIT 1
            "
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Intention::try_from).transpose()
    }

    #[instrument(skip(self, intention), fields(intention_id = %intention.id))]
    async fn create(&self, intention: &Intention) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO intentions (id, name, email, phone, message, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(intention.id)
        .bind(&intention.name)
        .bind(&intention.email)
        .bind(&intention.phone)
        .bind(&intention.message)
        .bind(intention.status.as_str())
        .bind(intention.created_at)
        .bind(intention.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateEmail))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        status: Option<IntentionStatus>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<IntentionPage> {
        let (models, total) = match status {
            Some(status) => {
                let models = sqlx::query_as::<_, IntentionModel>(&format!(
                    r"
                    SELECT {INTENTION_COLUMNS}
                    FROM intentions
                    WHERE status = $1 AND deleted_at IS NULL
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "
                ))
                .bind(status.as_str())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

                let (total,): (i64,) = sqlx::query_as(
                    "SELECT COUNT(*) FROM intentions WHERE status = $1 AND deleted_at IS NULL",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

                (models, total)
            }
            None => {
                let models = sqlx::query_as::<_, IntentionModel>(&format!(
                    r"
                    SELECT {INTENTION_COLUMNS}
                    FROM intentions
                    WHERE deleted_at IS NULL
                    ORDER BY created_at DESC
                    LIMIT $1 OFFSET $2
                    "
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

                let (total,): (i64,) =
                    sqlx::query_as("SELECT COUNT(*) FROM intentions WHERE deleted_at IS NULL")
                        .fetch_one(&self.pool)
                        .await
                        .map_err(map_db_error)?;

                (models, total)
            }
        };

        let intentions = models
            .into_iter()
            .map(Intention::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IntentionPage { intentions, total })
    }

    #[instrument(skip(self, seed))]
    async fn approve_pending(&self, id: Uuid, seed: &MemberSeed) -> RepoResult<ApprovalOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the intention row for the duration of the transaction
        let model = sqlx::query_as::<_, IntentionModel>(&format!(
            "SELECT {INTENTION_COLUMNS} FROM intentions WHERE id = $1 AND deleted_at IS NULL FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| intention_not_found(id))?;

        if model.status != IntentionStatus::Pending.as_str() {
            return Err(DomainError::IntentionAlreadyProcessed);
        }

        sqlx::query("UPDATE intentions SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(IntentionStatus::Approved.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        // An existing account with the same email skips the invite flow
        let user = sqlx::query_as::<_, UserModel>(
            "SELECT id, name, email, role, member_id FROM users WHERE email = $1 FOR UPDATE",
        )
        .bind(&model.email)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let member = if user.is_some() {
            Member::active(model.name.clone(), model.email.clone())
        } else {
            Member::invited(
                model.name.clone(),
                model.email.clone(),
                seed.invite_token.clone(),
                seed.token_expiry,
            )
        }
        .with_intention(model.id)
        .with_phone(model.phone.clone());

        sqlx::query(
            r"
            INSERT INTO members (id, name, email, phone, company, position, status,
                                 invite_token, token_expiry, intention_id, joined_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(&member.company)
        .bind(&member.position)
        .bind(member.status.as_str())
        .bind(&member.invite_token)
        .bind(member.token_expiry)
        .bind(member.intention_id)
        .bind(member.joined_at)
        .bind(member.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateEmail))?;

        let linked_user_id = match user {
            Some(user) => {
                sqlx::query(
                    r"
                    UPDATE users
                    SET member_id = $2,
                        role = CASE WHEN role = 'GUEST' THEN 'MEMBER' ELSE role END,
                        updated_at = NOW()
                    WHERE id = $1
                    ",
                )
                .bind(user.id)
                .bind(member.id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                Some(user.id)
            }
            None => None,
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(ApprovalOutcome {
            member,
            linked_user_id,
        })
    }

    #[instrument(skip(self))]
    async fn reject_pending(&self, id: Uuid) -> RepoResult<Intention> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, IntentionModel>(&format!(
            "SELECT {INTENTION_COLUMNS} FROM intentions WHERE id = $1 AND deleted_at IS NULL FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| intention_not_found(id))?;

        if model.status != IntentionStatus::Pending.as_str() {
            return Err(DomainError::IntentionAlreadyProcessed);
        }

        let updated = sqlx::query_as::<_, IntentionModel>(&format!(
            r"
            UPDATE intentions
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {INTENTION_COLUMNS}
            "
        ))
        .bind(id)
        .bind(IntentionStatus::Rejected.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Intention::try_from(updated)
    }
}
