//! Member service
//!
//! Admin listing of the member roster.

use tracing::instrument;
use uuid::Uuid;

use portal_core::DomainError;

use crate::aggregate;
use crate::dto::{MemberSummaryResponse, PaginatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List members for the admin roster view, newest joiners first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: i64,
        limit: i64,
    ) -> ServiceResult<PaginatedResponse<MemberSummaryResponse>> {
        let offset = aggregate::offset(page, limit);
        let result = self.ctx.member_repo().list(limit, offset).await?;

        let data = result
            .members
            .into_iter()
            .map(MemberSummaryResponse::from)
            .collect();

        Ok(PaginatedResponse::new(data, page, limit, result.total))
    }

    /// Fetch a single member
    #[instrument(skip(self))]
    pub async fn get(&self, member_id: Uuid) -> ServiceResult<MemberSummaryResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(member_id))?;

        Ok(MemberSummaryResponse::from(member))
    }
}
