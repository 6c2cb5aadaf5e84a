use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MeetingSchedule {
    pub id: i64,
    pub job_application_id: i64,
    pub scheduled_by: Option<i64>,
    pub scheduled_meet_date: Option<DateTime<Utc>>,
    pub scheduled_meet_time: Option<NaiveTime>,
    pub scheduled_meet_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MeetingSchedule {
    pub fn label(applicant_username: &str) -> String {
        format!("Meeting for {}", applicant_username)
    }
}
