//! Attendance handlers
//!
//! Meeting check-in and per-member attendance statistics.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use portal_service::dto::{AttendanceStatsResponse, CheckInRequest, CheckInResponse};
use portal_service::AttendanceService;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extractors::{RequireAdmin, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Check-in response envelope
#[derive(Debug, Serialize)]
pub struct CheckInEnvelope {
    pub message: String,
    pub attendance: CheckInResponse,
}

/// Stats response envelope
#[derive(Debug, Serialize)]
pub struct StatsEnvelope {
    pub stats: AttendanceStatsResponse,
}

/// Check a member in to a meeting (admin)
///
/// POST /meetings/{meeting_id}/check-in
pub async fn check_in(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(meeting_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CheckInRequest>,
) -> ApiResult<Json<CheckInEnvelope>> {
    let service = AttendanceService::new(state.service_context());
    let attendance = service.check_in(meeting_id, request).await?;

    Ok(Json(CheckInEnvelope {
        message: "Checked in".to_string(),
        attendance,
    }))
}

/// Query parameters for the member stats lookup
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub member_id: Option<Uuid>,
    pub period: Option<String>,
}

/// Attendance statistics for one member (admin)
///
/// GET /attendances/stats?memberId=&period=
///
/// `period` is `all` (default), `monthly`, or `yearly`, anchored at the
/// first day of the current month/year (UTC).
pub async fn member_stats(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Query(query): Query<StatsQuery>,
) -> ApiResult<Json<StatsEnvelope>> {
    let member_id = query
        .member_id
        .ok_or_else(|| ApiError::invalid_query("memberId query parameter is required"))?;

    let since = period_start(query.period.as_deref())?;

    let service = AttendanceService::new(state.service_context());
    let stats = service.member_stats(member_id, since).await?;

    Ok(Json(StatsEnvelope { stats }))
}

/// Translate a period filter into a cutoff timestamp
fn period_start(period: Option<&str>) -> Result<Option<DateTime<Utc>>, ApiError> {
    let now = Utc::now();
    match period.unwrap_or("all") {
        "all" => Ok(None),
        "monthly" => Utc
            .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
            .single()
            .map(Some)
            .ok_or_else(|| ApiError::internal(anyhow::anyhow!("month boundary out of range"))),
        "yearly" => Utc
            .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
            .single()
            .map(Some)
            .ok_or_else(|| ApiError::internal(anyhow::anyhow!("year boundary out of range"))),
        other => Err(ApiError::invalid_query(format!(
            "Unknown period filter: {other}"
        ))),
    }
}
