use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reviewer's verdict on a meeting. `decision` is free text; "accept" and
/// "reject" are the expected values but nothing enforces them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MeetingReview {
    pub id: i64,
    pub meeting_schedule_id: i64,
    pub reviewer_id: Option<i64>,
    pub decision: String,
    pub reason: String,
}

impl MeetingReview {
    pub fn label(first_name: &str, last_name: &str) -> String {
        format!("Review for {} {}", first_name, last_name)
    }
}
