//! Intention service
//!
//! Public submission and status lookup, plus the admin listing.

use tracing::{info, instrument};

use portal_core::{Intention, IntentionStatus};

use crate::aggregate;
use crate::dto::{
    IntentionResponse, IntentionStatusResponse, PaginatedResponse, SubmitIntentionRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Intention service
pub struct IntentionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IntentionService<'a> {
    /// Create a new IntentionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a new membership application
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        request: SubmitIntentionRequest,
    ) -> ServiceResult<IntentionStatusResponse> {
        let intention = Intention::new(request.name, request.email)
            .with_phone(request.phone)
            .with_message(request.message);

        self.ctx.intention_repo().create(&intention).await?;

        info!(intention_id = %intention.id, "Intention submitted");

        Ok(IntentionStatusResponse::from(intention))
    }

    /// List intentions for the admin review queue
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        status: Option<IntentionStatus>,
        page: i64,
        limit: i64,
    ) -> ServiceResult<PaginatedResponse<IntentionResponse>> {
        let offset = aggregate::offset(page, limit);
        let result = self.ctx.intention_repo().list(status, limit, offset).await?;

        let data = result
            .intentions
            .into_iter()
            .map(IntentionResponse::from)
            .collect();

        Ok(PaginatedResponse::new(data, page, limit, result.total))
    }

    /// Look up the status of an application by the applicant's email
    #[instrument(skip(self))]
    pub async fn status_by_email(&self, email: &str) -> ServiceResult<IntentionStatusResponse> {
        let intention = self
            .ctx
            .intention_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("Intention", email.to_string()))?;

        Ok(IntentionStatusResponse::from(intention))
    }
}
