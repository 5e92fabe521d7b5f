//! Intention handlers
//!
//! Public submission and status lookup, plus the admin review queue and
//! the approve/reject transitions.

use axum::{
    extract::{Query, State},
    Json,
};
use portal_core::IntentionStatus;
use portal_service::dto::{
    ApproveIntentionRequest, ApprovedMemberResponse, IntentionResponse, IntentionStatusResponse,
    PaginationMeta, RejectIntentionRequest, SubmitIntentionRequest,
};
use portal_service::{AdmissionService, IntentionService};
use serde::{Deserialize, Serialize};

use crate::extractors::{Pagination, RequireAdmin, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Submission response envelope
#[derive(Debug, Serialize)]
pub struct IntentionEnvelope {
    pub intention: IntentionStatusResponse,
}

/// Admin listing envelope
#[derive(Debug, Serialize)]
pub struct IntentionListEnvelope {
    pub intentions: Vec<IntentionResponse>,
    pub pagination: PaginationMeta,
}

/// Approval response envelope
#[derive(Debug, Serialize)]
pub struct ApprovalEnvelope {
    pub message: String,
    pub member: ApprovedMemberResponse,
}

/// Rejection response envelope
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: String,
}

/// Submit a membership application (public)
///
/// POST /intentions
pub async fn submit_intention(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitIntentionRequest>,
) -> ApiResult<Created<Json<IntentionEnvelope>>> {
    let service = IntentionService::new(state.service_context());
    let intention = service.submit(request).await?;
    Ok(Created(Json(IntentionEnvelope { intention })))
}

/// Query parameters for the admin listing
#[derive(Debug, Deserialize)]
pub struct ListIntentionsQuery {
    pub status: Option<String>,
}

/// List intentions for review (admin)
///
/// GET /intentions?status=&page=&limit=
pub async fn list_intentions(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    pagination: Pagination,
    Query(query): Query<ListIntentionsQuery>,
) -> ApiResult<Json<IntentionListEnvelope>> {
    let status = query
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| {
            IntentionStatus::parse(&s.to_uppercase())
                .ok_or_else(|| ApiError::invalid_query(format!("Unknown status filter: {s}")))
        })
        .transpose()?;

    let service = IntentionService::new(state.service_context());
    let page = service
        .list(status, pagination.page, pagination.limit)
        .await?;

    Ok(Json(IntentionListEnvelope {
        intentions: page.data,
        pagination: page.pagination,
    }))
}

/// Query parameters for the public status lookup
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub email: Option<String>,
}

/// Look up an application's status by email (public)
///
/// GET /intentions/status?email=
///
/// The response is the whitelisted subset only; phone and message never
/// appear here.
pub async fn intention_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<IntentionEnvelope>> {
    let email = query
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::invalid_query("email query parameter is required"))?;

    let service = IntentionService::new(state.service_context());
    let intention = service.status_by_email(email).await?;
    Ok(Json(IntentionEnvelope { intention }))
}

/// Approve a pending intention (admin)
///
/// POST /intentions/approve
pub async fn approve_intention(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(request): ValidatedJson<ApproveIntentionRequest>,
) -> ApiResult<Json<ApprovalEnvelope>> {
    let service = AdmissionService::new(state.service_context());
    let member = service.approve(request).await?;

    Ok(Json(ApprovalEnvelope {
        message: "Intention approved".to_string(),
        member,
    }))
}

/// Reject a pending intention (admin)
///
/// POST /intentions/reject
pub async fn reject_intention(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(request): ValidatedJson<RejectIntentionRequest>,
) -> ApiResult<Json<MessageEnvelope>> {
    let service = AdmissionService::new(state.service_context());
    service.reject(request).await?;

    Ok(Json(MessageEnvelope {
        message: "Intention rejected".to_string(),
    }))
}
