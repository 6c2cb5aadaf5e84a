use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateMeetingSchedulePayload {
    pub job_application_id: i64,
    pub scheduled_by: Option<i64>,
    pub scheduled_meet_date: Option<DateTime<Utc>>,
    pub scheduled_meet_time: Option<NaiveTime>,
    #[validate(url, length(max = 200))]
    pub scheduled_meet_link: Option<String>,
    #[serde(default)]
    pub attendee_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMeetingSchedulePayload {
    pub scheduled_by: Option<i64>,
    pub scheduled_meet_date: Option<DateTime<Utc>>,
    pub scheduled_meet_time: Option<NaiveTime>,
    #[validate(url, length(max = 200))]
    pub scheduled_meet_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMeetingReviewPayload {
    pub meeting_schedule_id: i64,
    pub reviewer_id: Option<i64>,
    #[validate(length(min = 1, max = 600))]
    pub decision: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMeetingReviewPayload {
    #[validate(length(min = 1, max = 600))]
    pub decision: Option<String>,
    pub reason: Option<String>,
}
