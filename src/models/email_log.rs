use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Record of a notification that was already sent by the mail transport.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmailLog {
    pub id: i64,
    pub applicant: Option<String>,
    pub sender_name: String,
    pub to_email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for EmailLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {} - {}", self.sender_name, self.to_email, self.subject)
    }
}
