//! Thank entity - a referral/appreciation record between members

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Thank record, read-only contributor to dashboard statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thank {
    pub id: Uuid,
    pub from_member_id: Uuid,
    pub to_member_id: Uuid,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Thank {
    pub fn new(from_member_id: Uuid, to_member_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_member_id,
            to_member_id,
            description: None,
            created_at: Utc::now(),
        }
    }
}
