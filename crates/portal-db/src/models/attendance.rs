//! Attendance database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use portal_core::{Attendance, MemberAttendance};

/// Database model for the attendances table
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceModel {
    pub id: Uuid,
    pub member_id: Uuid,
    pub meeting_id: Uuid,
    pub checked_in: bool,
    pub check_in_at: Option<DateTime<Utc>>,
}

impl From<AttendanceModel> for Attendance {
    fn from(model: AttendanceModel) -> Self {
        Attendance {
            id: model.id,
            member_id: model.member_id,
            meeting_id: model.meeting_id,
            checked_in: model.checked_in,
            check_in_at: model.check_in_at,
        }
    }
}

/// Attendance row joined with its meeting's date
#[derive(Debug, Clone, FromRow)]
pub struct MemberAttendanceRow {
    pub meeting_date: DateTime<Utc>,
    pub checked_in: bool,
}

impl From<MemberAttendanceRow> for MemberAttendance {
    fn from(row: MemberAttendanceRow) -> Self {
        MemberAttendance {
            meeting_date: row.meeting_date,
            checked_in: row.checked_in,
        }
    }
}
