//! Membership (dues) service

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{MembershipResponse, PayMembershipRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a dues payment. Pending and Overdue dues are payable; a Paid
    /// or Cancelled record rejects the transition.
    #[instrument(skip(self, request))]
    pub async fn pay(
        &self,
        membership_id: Uuid,
        request: PayMembershipRequest,
    ) -> ServiceResult<MembershipResponse> {
        let paid_at = request.paid_at.unwrap_or_else(Utc::now);

        let membership = self
            .ctx
            .membership_repo()
            .mark_paid(
                membership_id,
                paid_at,
                &request.payment_method,
                request.notes.as_deref(),
            )
            .await?;

        info!(
            membership_id = %membership.id,
            member_id = %membership.member_id,
            period = %membership.period,
            "Membership paid"
        );

        Ok(MembershipResponse::from(membership))
    }

    /// Flag an unpaid membership as overdue
    #[instrument(skip(self))]
    pub async fn mark_overdue(&self, membership_id: Uuid) -> ServiceResult<MembershipResponse> {
        let membership = self.ctx.membership_repo().mark_overdue(membership_id).await?;
        Ok(MembershipResponse::from(membership))
    }

    /// Cancel a membership record
    #[instrument(skip(self))]
    pub async fn cancel(&self, membership_id: Uuid) -> ServiceResult<MembershipResponse> {
        let membership = self.ctx.membership_repo().cancel(membership_id).await?;
        info!(membership_id = %membership.id, "Membership cancelled");
        Ok(MembershipResponse::from(membership))
    }
}
