//! PostgreSQL repository implementations

mod attendance;
mod error;
mod intention;
mod meeting;
mod member;
mod membership;
mod thank;

pub use attendance::PgAttendanceRepository;
pub use intention::PgIntentionRepository;
pub use meeting::PgMeetingRepository;
pub use member::PgMemberRepository;
pub use membership::PgMembershipRepository;
pub use thank::PgThankRepository;
