//! Dashboard handlers
//!
//! Group-wide statistics for the admin dashboard.

use axum::{extract::State, Json};
use portal_service::dto::GroupStatsResponse;
use portal_service::StatsService;
use serde::Serialize;

use crate::extractors::RequireAdmin;
use crate::response::ApiResult;
use crate::state::AppState;

/// Dashboard response envelope
#[derive(Debug, Serialize)]
pub struct GroupStatsEnvelope {
    pub stats: GroupStatsResponse,
}

/// Group-wide dashboard statistics (admin)
///
/// GET /dashboard/group
pub async fn group_stats(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> ApiResult<Json<GroupStatsEnvelope>> {
    let service = StatsService::new(state.service_context());
    let stats = service.group_stats().await?;
    Ok(Json(GroupStatsEnvelope { stats }))
}
