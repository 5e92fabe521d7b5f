//! Admission service
//!
//! Drives the intention state machine: approval creates the member (and
//! links an existing account), rejection records the reviewer's reason.
//! Both transitions are atomic in the store; the applicant notification is
//! dispatched after commit and its failure is reported without rolling the
//! transition back.

use tracing::{info, instrument, warn};

use crate::dto::{ApproveIntentionRequest, ApprovedMemberResponse, IntentionResponse, RejectIntentionRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notify::{invitation_mail, rejection_mail, welcome_back_mail};
use super::token::registration_url;

const MIN_REASON_LENGTH: usize = 10;

/// Admission service
pub struct AdmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdmissionService<'a> {
    /// Create a new AdmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Approve a pending intention
    #[instrument(skip(self, request), fields(intention_id = %request.intention_id))]
    pub async fn approve(
        &self,
        request: ApproveIntentionRequest,
    ) -> ServiceResult<ApprovedMemberResponse> {
        let seed = self.ctx.token_issuer().issue();

        let outcome = self
            .ctx
            .intention_repo()
            .approve_pending(request.intention_id, &seed)
            .await?;

        let member = outcome.member;

        let link = member
            .invite_token
            .as_deref()
            .map(|token| registration_url(self.ctx.registration_base_url(), token));

        info!(
            intention_id = %request.intention_id,
            member_id = %member.id,
            status = %member.status.as_str(),
            linked = outcome.linked_user_id.is_some(),
            "Intention approved"
        );

        // Post-commit notification. The approval stands either way; a
        // dispatch failure is surfaced so an operator can resend.
        let mail = match &link {
            Some(url) => invitation_mail(&member.email, &member.name, url),
            None => welcome_back_mail(&member.email, &member.name),
        };

        if let Err(e) = self.ctx.notifier().send(&mail).await {
            warn!(member_id = %member.id, error = %e, "Approval notification failed");
            return Err(ServiceError::notification(e.0));
        }

        Ok(ApprovedMemberResponse {
            id: member.id,
            name: member.name,
            email: member.email,
            status: member.status,
            invite_token: member.invite_token,
            token_expiry: member.token_expiry,
            registration_url: link,
            linked_user_id: outcome.linked_user_id,
        })
    }

    /// Reject a pending intention
    #[instrument(skip(self, request), fields(intention_id = %request.intention_id))]
    pub async fn reject(
        &self,
        request: RejectIntentionRequest,
    ) -> ServiceResult<IntentionResponse> {
        if request.reason.trim().chars().count() < MIN_REASON_LENGTH {
            return Err(portal_core::DomainError::ReasonTooShort {
                min: MIN_REASON_LENGTH,
            }
            .into());
        }

        let intention = self
            .ctx
            .intention_repo()
            .reject_pending(request.intention_id)
            .await?;

        info!(intention_id = %intention.id, "Intention rejected");

        let mail = rejection_mail(&intention.email, &intention.name, request.reason.trim());
        if let Err(e) = self.ctx.notifier().send(&mail).await {
            warn!(intention_id = %intention.id, error = %e, "Rejection notification failed");
            return Err(ServiceError::notification(e.0));
        }

        Ok(IntentionResponse::from(intention))
    }
}
