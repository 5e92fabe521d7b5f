//! Service context - dependency container for services
//!
//! Holds the repository ports, the notifier, and the invite token issuer.

use std::sync::Arc;

use portal_common::auth::JwtService;
use portal_core::{
    AttendanceRepository, IntentionRepository, MeetingRepository, MemberRepository,
    MembershipRepository, Notifier, ThankRepository,
};

use super::token::TokenIssuer;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repository ports
/// - The notifier for applicant mail
/// - The invite token issuer
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    intention_repo: Arc<dyn IntentionRepository>,
    member_repo: Arc<dyn MemberRepository>,
    meeting_repo: Arc<dyn MeetingRepository>,
    attendance_repo: Arc<dyn AttendanceRepository>,
    thank_repo: Arc<dyn ThankRepository>,
    membership_repo: Arc<dyn MembershipRepository>,

    // Outbound notification port
    notifier: Arc<dyn Notifier>,

    // Services
    token_issuer: TokenIssuer,
    jwt_service: Arc<JwtService>,

    // Base URL registration links are built from
    registration_base_url: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        intention_repo: Arc<dyn IntentionRepository>,
        member_repo: Arc<dyn MemberRepository>,
        meeting_repo: Arc<dyn MeetingRepository>,
        attendance_repo: Arc<dyn AttendanceRepository>,
        thank_repo: Arc<dyn ThankRepository>,
        membership_repo: Arc<dyn MembershipRepository>,
        notifier: Arc<dyn Notifier>,
        token_issuer: TokenIssuer,
        jwt_service: Arc<JwtService>,
        registration_base_url: String,
    ) -> Self {
        Self {
            intention_repo,
            member_repo,
            meeting_repo,
            attendance_repo,
            thank_repo,
            membership_repo,
            notifier,
            token_issuer,
            jwt_service,
            registration_base_url,
        }
    }

    // === Repositories ===

    /// Get the intention repository
    pub fn intention_repo(&self) -> &dyn IntentionRepository {
        self.intention_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the meeting repository
    pub fn meeting_repo(&self) -> &dyn MeetingRepository {
        self.meeting_repo.as_ref()
    }

    /// Get the attendance repository
    pub fn attendance_repo(&self) -> &dyn AttendanceRepository {
        self.attendance_repo.as_ref()
    }

    /// Get the thank repository
    pub fn thank_repo(&self) -> &dyn ThankRepository {
        self.thank_repo.as_ref()
    }

    /// Get the membership repository
    pub fn membership_repo(&self) -> &dyn MembershipRepository {
        self.membership_repo.as_ref()
    }

    // === Outbound ports ===

    /// Get the notifier
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    // === Services ===

    /// Get the invite token issuer
    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.token_issuer
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the base URL registration links are built from
    pub fn registration_base_url(&self) -> &str {
        &self.registration_base_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("registration_base_url", &self.registration_base_url)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    intention_repo: Option<Arc<dyn IntentionRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    meeting_repo: Option<Arc<dyn MeetingRepository>>,
    attendance_repo: Option<Arc<dyn AttendanceRepository>>,
    thank_repo: Option<Arc<dyn ThankRepository>>,
    membership_repo: Option<Arc<dyn MembershipRepository>>,
    notifier: Option<Arc<dyn Notifier>>,
    token_issuer: Option<TokenIssuer>,
    jwt_service: Option<Arc<JwtService>>,
    registration_base_url: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intention_repo(mut self, repo: Arc<dyn IntentionRepository>) -> Self {
        self.intention_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn meeting_repo(mut self, repo: Arc<dyn MeetingRepository>) -> Self {
        self.meeting_repo = Some(repo);
        self
    }

    pub fn attendance_repo(mut self, repo: Arc<dyn AttendanceRepository>) -> Self {
        self.attendance_repo = Some(repo);
        self
    }

    pub fn thank_repo(mut self, repo: Arc<dyn ThankRepository>) -> Self {
        self.thank_repo = Some(repo);
        self
    }

    pub fn membership_repo(mut self, repo: Arc<dyn MembershipRepository>) -> Self {
        self.membership_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn token_issuer(mut self, issuer: TokenIssuer) -> Self {
        self.token_issuer = Some(issuer);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn registration_base_url(mut self, url: impl Into<String>) -> Self {
        self.registration_base_url = Some(url.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.intention_repo
                .ok_or_else(|| ServiceError::validation("intention_repo is required"))?,
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.meeting_repo
                .ok_or_else(|| ServiceError::validation("meeting_repo is required"))?,
            self.attendance_repo
                .ok_or_else(|| ServiceError::validation("attendance_repo is required"))?,
            self.thank_repo
                .ok_or_else(|| ServiceError::validation("thank_repo is required"))?,
            self.membership_repo
                .ok_or_else(|| ServiceError::validation("membership_repo is required"))?,
            self.notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            self.token_issuer
                .ok_or_else(|| ServiceError::validation("token_issuer is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.registration_base_url
                .ok_or_else(|| ServiceError::validation("registration_base_url is required"))?,
        ))
    }
}
