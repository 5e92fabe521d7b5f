//! Membership (dues) handlers

use axum::{
    extract::{Path, State},
    Json,
};
use portal_service::dto::{MembershipResponse, PayMembershipRequest};
use portal_service::MembershipService;
use uuid::Uuid;

use crate::extractors::{RequireAdmin, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Record a dues payment (admin)
///
/// POST /memberships/{membership_id}/pay
pub async fn pay_membership(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(membership_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<PayMembershipRequest>,
) -> ApiResult<Json<MembershipResponse>> {
    let service = MembershipService::new(state.service_context());
    let membership = service.pay(membership_id, request).await?;
    Ok(Json(membership))
}

/// Flag an unpaid membership as overdue (admin)
///
/// POST /memberships/{membership_id}/overdue
pub async fn mark_overdue(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(membership_id): Path<Uuid>,
) -> ApiResult<Json<MembershipResponse>> {
    let service = MembershipService::new(state.service_context());
    let membership = service.mark_overdue(membership_id).await?;
    Ok(Json(membership))
}

/// Cancel a membership record (admin)
///
/// POST /memberships/{membership_id}/cancel
pub async fn cancel_membership(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(membership_id): Path<Uuid>,
) -> ApiResult<Json<MembershipResponse>> {
    let service = MembershipService::new(state.service_context());
    let membership = service.cancel(membership_id).await?;
    Ok(Json(membership))
}
