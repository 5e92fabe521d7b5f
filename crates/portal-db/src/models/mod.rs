//! Database models
//!
//! SQLx `FromRow` structs mirroring the table layouts, with conversions
//! into the domain entities. Status columns are stored as text; a row with
//! an unknown status fails conversion instead of being silently coerced.

mod attendance;
mod intention;
mod meeting;
mod member;
mod membership;
mod user;

pub use attendance::{AttendanceModel, MemberAttendanceRow};
pub use intention::IntentionModel;
pub use meeting::MeetingModel;
pub use member::MemberModel;
pub use membership::MembershipModel;
pub use user::UserModel;
