//! Meeting entity - read-only input to the aggregation engine

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Meeting entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    pub meeting_type: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Meeting {
    pub fn new(title: impl Into<String>, date: DateTime<Utc>, meeting_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
            meeting_type: meeting_type.into(),
            location: None,
            description: None,
        }
    }
}
