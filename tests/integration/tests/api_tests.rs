//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use portal_core::UserRole;
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Intention Submission Tests
// ============================================================================

#[tokio::test]
async fn test_submit_intention() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SubmitIntentionBody::unique();

    let response = server.post("/api/v1/intentions", &request).await.unwrap();
    let envelope: IntentionEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(envelope.intention.email, request.email);
    assert_eq!(envelope.intention.status, "PENDING");
}

#[tokio::test]
async fn test_submit_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SubmitIntentionBody::unique();

    // First submission
    server.post("/api/v1/intentions", &request).await.unwrap();

    // Second submission with same email
    let response = server.post("/api/v1/intentions", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_submit_invalid_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SubmitIntentionBody::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/api/v1/intentions", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Status Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_status_lookup_whitelists_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SubmitIntentionBody::unique();
    server.post("/api/v1/intentions", &request).await.unwrap();

    let response = server
        .get(&format!("/api/v1/intentions/status?email={}", request.email))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    let intention = &body["intention"];
    assert_eq!(intention["email"], request.email.as_str());
    assert_eq!(intention["status"], "PENDING");
    // Contact internals never appear on the public surface
    assert!(intention.get("phone").is_none());
    assert!(intention.get("message").is_none());
    assert!(intention.get("company").is_none());
}

#[tokio::test]
async fn test_status_lookup_requires_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/intentions/status").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_status_lookup_unknown_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/intentions/status?email=nobody@example.com")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admission Tests
// ============================================================================

#[tokio::test]
async fn test_approve_issues_invite_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    let request = SubmitIntentionBody::unique();
    let response = server.post("/api/v1/intentions", &request).await.unwrap();
    let submitted: IntentionEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/intentions/approve",
            &token,
            &ApproveBody {
                intention_id: submitted.intention.id,
            },
        )
        .await
        .unwrap();
    let approval: ApprovalEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(approval.member.status, "INVITED");
    let invite_token = approval.member.invite_token.expect("invite token missing");
    assert_eq!(invite_token.len(), 32);

    let url = approval
        .member
        .registration_url
        .expect("registration url missing");
    assert!(url.contains(&format!("/register?token={invite_token}")));
}

#[tokio::test]
async fn test_double_approve_is_guarded() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    let request = SubmitIntentionBody::unique();
    let response = server.post("/api/v1/intentions", &request).await.unwrap();
    let submitted: IntentionEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = ApproveBody {
        intention_id: submitted.intention.id,
    };

    let first = server
        .post_auth("/api/v1/intentions/approve", &token, &body)
        .await
        .unwrap();
    assert_status(first, StatusCode::OK).await.unwrap();

    let second = server
        .post_auth("/api/v1/intentions/approve", &token, &body)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(second, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "ALREADY_PROCESSED");
}

#[tokio::test]
async fn test_reject_requires_reason() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    let request = SubmitIntentionBody::unique();
    let response = server.post("/api/v1/intentions", &request).await.unwrap();
    let submitted: IntentionEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Too short: validation fails before any store access
    let response = server
        .post_auth(
            "/api/v1/intentions/reject",
            &token,
            &RejectBody {
                intention_id: submitted.intention.id,
                reason: "abc".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // The intention is still pending and a proper rejection goes through
    let response = server
        .post_auth(
            "/api/v1/intentions/reject",
            &token,
            &RejectBody {
                intention_id: submitted.intention.id,
                reason: "The application form is incomplete".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_approve_unknown_intention() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    let response = server
        .post_auth(
            "/api/v1/intentions/approve",
            &token,
            &ApproveBody {
                intention_id: uuid::Uuid::new_v4(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Authorization Tests
// ============================================================================

#[tokio::test]
async fn test_admin_routes_require_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/intentions").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/api/v1/dashboard/group").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_routes_reject_non_admins() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for(UserRole::Member).unwrap();

    let response = server.get_auth("/api/v1/intentions", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The admin check runs before body validation
    let response = server
        .post_auth(
            "/api/v1/intentions/reject",
            &token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Listing and Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_list_intentions_paginates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    for _ in 0..3 {
        let request = SubmitIntentionBody::unique();
        server.post("/api/v1/intentions", &request).await.unwrap();
    }

    let response = server
        .get_auth("/api/v1/intentions?status=pending&page=1&limit=2", &token)
        .await
        .unwrap();
    let page: IntentionListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(page.intentions.len() <= 2);
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 2);
    assert!(page.pagination.total >= 3);
    assert!(page.pagination.total_pages >= 2);
}

#[tokio::test]
async fn test_list_intentions_rejects_unknown_status() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    let response = server
        .get_auth("/api/v1/intentions?status=bogus", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Dashboard Tests
// ============================================================================

#[tokio::test]
async fn test_dashboard_group_stats() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    let response = server
        .get_auth("/api/v1/dashboard/group", &token)
        .await
        .unwrap();
    let envelope: GroupStatsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    // Aggregation is defined at every zero-denominator boundary
    assert!(envelope.stats.total_members >= 0);
    assert!(envelope.stats.average_attendance.is_finite());
    assert!(envelope.stats.monthly_growth.is_finite());
}

// ============================================================================
// Check-in Tests
// ============================================================================

#[tokio::test]
async fn test_check_in_unknown_meeting() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/meetings/{}/check-in", uuid::Uuid::new_v4()),
            &token,
            &CheckInBody {
                member_id: uuid::Uuid::new_v4(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_member_stats_after_approval() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    // Admit a member through the approval flow
    let request = SubmitIntentionBody::unique();
    let response = server.post("/api/v1/intentions", &request).await.unwrap();
    let submitted: IntentionEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/intentions/approve",
            &token,
            &ApproveBody {
                intention_id: submitted.intention.id,
            },
        )
        .await
        .unwrap();
    let approval: ApprovalEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    // Member stats exist for the new member even with no meetings
    let response = server
        .get_auth(
            &format!("/api/v1/attendances/stats?memberId={}", approval.member.id),
            &token,
        )
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["stats"]["attendanceRate"].is_number());
}

#[tokio::test]
async fn test_member_stats_requires_member_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().unwrap();

    let response = server
        .get_auth("/api/v1/attendances/stats", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
