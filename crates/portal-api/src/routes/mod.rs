//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{attendances, dashboard, health, intentions, members, memberships};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted at the root, outside /api/v1)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(intention_routes())
        .merge(member_routes())
        .merge(attendance_routes())
        .merge(membership_routes())
}

/// Intention and admission routes
fn intention_routes() -> Router<AppState> {
    Router::new()
        .route("/intentions", post(intentions::submit_intention))
        .route("/intentions", get(intentions::list_intentions))
        .route("/intentions/status", get(intentions::intention_status))
        .route("/intentions/approve", post(intentions::approve_intention))
        .route("/intentions/reject", post(intentions::reject_intention))
}

/// Member roster routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members/:member_id", get(members::get_member))
}

/// Check-in, stats, and dashboard routes
fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/meetings/:meeting_id/check-in", post(attendances::check_in))
        .route("/attendances/stats", get(attendances::member_stats))
        .route("/dashboard/group", get(dashboard::group_stats))
}

/// Membership dues routes
fn membership_routes() -> Router<AppState> {
    Router::new()
        .route("/memberships/:membership_id/pay", post(memberships::pay_membership))
        .route("/memberships/:membership_id/overdue", post(memberships::mark_overdue))
        .route("/memberships/:membership_id/cancel", post(memberships::cancel_membership))
}
