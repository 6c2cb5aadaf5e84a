use serde::{Deserialize, Serialize};

/// One row of an administrative listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLabel {
    pub id: i64,
    pub label: String,
}

/// Entity kinds that have an administrative listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Profile,
    Job,
    JobApplication,
    MeetingSchedule,
    MeetingReview,
    TeamLeadDecision,
    ManagerDecision,
    EmailLog,
}
