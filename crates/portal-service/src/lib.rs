//! # portal-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod aggregate;
pub mod dto;
pub mod services;

pub use services::{
    AdmissionService, AttendanceService, IntentionService, LogNotifier, MemberService,
    MembershipService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StatsService, TokenIssuer,
};
