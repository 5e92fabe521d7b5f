//! Meeting database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use portal_core::Meeting;

/// Database model for the meetings table
#[derive(Debug, Clone, FromRow)]
pub struct MeetingModel {
    pub id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    pub meeting_type: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl From<MeetingModel> for Meeting {
    fn from(model: MeetingModel) -> Self {
        Meeting {
            id: model.id,
            title: model.title,
            date: model.date,
            meeting_type: model.meeting_type,
            location: model.location,
            description: model.description,
        }
    }
}
