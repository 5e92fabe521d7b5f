//! # portal-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Attendance, Intention, IntentionStatus, Meeting, Member, MemberStatus, Membership,
    MembershipStatus, Thank, User, UserRole,
};
pub use error::DomainError;
pub use traits::{
    ApprovalOutcome, AttendanceRepository, IntentionPage, IntentionRepository, Mail,
    MeetingRepository, MemberAttendance, MemberPage, MemberRepository, MemberSeed,
    MembershipRepository, Notifier, NotifyError, RepoResult, ThankRepository,
};
