//! Member handlers
//!
//! Admin roster views. List entries are whitelisted summaries; invite
//! tokens never appear here.

use axum::{
    extract::{Path, State},
    Json,
};
use portal_service::dto::{MemberSummaryResponse, PaginationMeta};
use portal_service::MemberService;
use serde::Serialize;
use uuid::Uuid;

use crate::extractors::{Pagination, RequireAdmin};
use crate::response::ApiResult;
use crate::state::AppState;

/// Member listing envelope
#[derive(Debug, Serialize)]
pub struct MemberListEnvelope {
    pub members: Vec<MemberSummaryResponse>,
    pub pagination: PaginationMeta,
}

/// List members (admin)
///
/// GET /members?page=&limit=
pub async fn list_members(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    pagination: Pagination,
) -> ApiResult<Json<MemberListEnvelope>> {
    let service = MemberService::new(state.service_context());
    let page = service.list(pagination.page, pagination.limit).await?;

    Ok(Json(MemberListEnvelope {
        members: page.data,
        pagination: page.pagination,
    }))
}

/// Get a single member (admin)
///
/// GET /members/{member_id}
pub async fn get_member(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(member_id): Path<Uuid>,
) -> ApiResult<Json<MemberSummaryResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.get(member_id).await?;
    Ok(Json(member))
}
