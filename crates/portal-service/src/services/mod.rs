//! Business logic services

mod admission;
mod attendance;
mod context;
mod error;
mod intention;
mod member;
mod membership;
mod notify;
mod stats;
mod token;

#[cfg(test)]
pub(crate) mod fakes;

pub use admission::AdmissionService;
pub use attendance::AttendanceService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use intention::IntentionService;
pub use member::MemberService;
pub use membership::MembershipService;
pub use notify::LogNotifier;
pub use stats::StatsService;
pub use token::TokenIssuer;
