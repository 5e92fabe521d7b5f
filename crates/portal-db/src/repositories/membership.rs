//! PostgreSQL implementation of MembershipRepository
//!
//! Payment and cancellation are guarded updates: the status predicate sits
//! in the UPDATE itself, and a miss is disambiguated with a follow-up read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::{
    DomainError, Membership, MembershipRepository, MembershipStatus, RepoResult,
};

use crate::models::MembershipModel;

use super::error::{map_db_error, membership_not_found};

const MEMBERSHIP_COLUMNS: &str = "id, member_id, period, amount_cents, status, paid_at, \
                                  payment_method, notes, created_at, updated_at";

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    /// Create a new PgMembershipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Re-read a membership after a guarded update missed, to distinguish
    /// "row does not exist" from "guard rejected the transition"
    async fn guard_failure(&self, id: Uuid) -> DomainError {
        let current = sqlx::query_as::<_, MembershipModel>(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM memberships WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        match current {
            Ok(Some(model)) => match MembershipStatus::parse(&model.status) {
                Some(MembershipStatus::Paid) => DomainError::MembershipAlreadyPaid,
                Some(MembershipStatus::Cancelled) => DomainError::MembershipCancelled,
                Some(_) => DomainError::DatabaseError(format!(
                    "guarded update missed membership {id} in status {}",
                    model.status
                )),
                None => DomainError::InternalError(format!(
                    "unknown membership status: {}",
                    model.status
                )),
            },
            Ok(None) => membership_not_found(id),
            Err(e) => map_db_error(e),
        }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Membership>> {
        let result = sqlx::query_as::<_, MembershipModel>(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM memberships WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Membership::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn mark_paid(
        &self,
        id: Uuid,
        paid_at: DateTime<Utc>,
        payment_method: &str,
        notes: Option<&str>,
    ) -> RepoResult<Membership> {
        let updated = sqlx::query_as::<_, MembershipModel>(&format!(
            r"
            UPDATE memberships
            SET status = 'PAID', paid_at = $2, payment_method = $3,
                notes = COALESCE($4, notes), updated_at = NOW()
            WHERE id = $1 AND status IN ('PENDING', 'OVERDUE')
            RETURNING {MEMBERSHIP_COLUMNS}
            "
        ))
        .bind(id)
        .bind(paid_at)
        .bind(payment_method)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match updated {
            Some(model) => Membership::try_from(model),
            None => Err(self.guard_failure(id).await),
        }
    }

    #[instrument(skip(self))]
    async fn mark_overdue(&self, id: Uuid) -> RepoResult<Membership> {
        let updated = sqlx::query_as::<_, MembershipModel>(&format!(
            r"
            UPDATE memberships
            SET status = 'OVERDUE', updated_at = NOW()
            WHERE id = $1 AND status = 'PENDING'
            RETURNING {MEMBERSHIP_COLUMNS}
            "
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match updated {
            Some(model) => Membership::try_from(model),
            None => {
                // Marking an already-overdue membership again is a no-op
                let current = self.find_by_id(id).await?.ok_or_else(|| membership_not_found(id))?;
                match current.status {
                    MembershipStatus::Overdue => Ok(current),
                    MembershipStatus::Paid => Err(DomainError::MembershipAlreadyPaid),
                    MembershipStatus::Cancelled => Err(DomainError::MembershipCancelled),
                    MembershipStatus::Pending => Err(DomainError::DatabaseError(format!(
                        "guarded update missed pending membership {id}"
                    ))),
                }
            }
        }
    }

    #[instrument(skip(self))]
    async fn cancel(&self, id: Uuid) -> RepoResult<Membership> {
        let updated = sqlx::query_as::<_, MembershipModel>(&format!(
            r"
            UPDATE memberships
            SET status = 'CANCELLED', updated_at = NOW()
            WHERE id = $1 AND status <> 'CANCELLED'
            RETURNING {MEMBERSHIP_COLUMNS}
            "
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match updated {
            Some(model) => Membership::try_from(model),
            None => {
                let exists = self.find_by_id(id).await?;
                match exists {
                    Some(_) => Err(DomainError::MembershipCancelled),
                    None => Err(membership_not_found(id)),
                }
            }
        }
    }
}
