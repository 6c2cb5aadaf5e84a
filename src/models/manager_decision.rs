use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Manager sign-off. `applicant` is a free-text name, not a reference to a
/// user or application row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ManagerDecision {
    pub id: i64,
    pub applicant: String,
    pub decision: Option<String>,
    pub reason: Option<String>,
    pub approved_by_manager: bool,
    pub meeting_link: Option<String>,
    pub meeting_date: Option<NaiveDate>,
    pub meeting_time: Option<NaiveTime>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for ManagerDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.applicant)
    }
}
