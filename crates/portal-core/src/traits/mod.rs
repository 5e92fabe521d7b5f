//! Ports - interfaces the application layer depends on

mod notifier;
mod repositories;

pub use notifier::{Mail, Notifier, NotifyError};
pub use repositories::{
    ApprovalOutcome, AttendanceRepository, IntentionPage, IntentionRepository, MeetingRepository,
    MemberAttendance, MemberPage, MemberRepository, MemberSeed, MembershipRepository, RepoResult,
    ThankRepository,
};
