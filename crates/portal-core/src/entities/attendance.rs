//! Attendance entity - one row per (member, meeting) pair

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Attendance record. The store enforces uniqueness on
/// `(member_id, meeting_id)`; check-in is an upsert, never an insert of a
/// second row for the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub id: Uuid,
    pub member_id: Uuid,
    pub meeting_id: Uuid,
    pub checked_in: bool,
    pub check_in_at: Option<DateTime<Utc>>,
}

impl Attendance {
    /// Create a checked-in attendance record
    pub fn checked_in(member_id: Uuid, meeting_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            meeting_id,
            checked_in: true,
            check_in_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_in_sets_timestamp() {
        let attendance = Attendance::checked_in(Uuid::new_v4(), Uuid::new_v4());
        assert!(attendance.checked_in);
        assert!(attendance.check_in_at.is_some());
    }
}
