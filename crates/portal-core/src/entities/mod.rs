//! Domain entities - core business objects

mod attendance;
mod intention;
mod meeting;
mod member;
mod membership;
mod thank;
mod user;

pub use attendance::Attendance;
pub use intention::{Intention, IntentionStatus};
pub use meeting::Meeting;
pub use member::{Member, MemberStatus};
pub use membership::{Membership, MembershipStatus};
pub use thank::Thank;
pub use user::{User, UserRole};
