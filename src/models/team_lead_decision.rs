use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "team_lead_verdict", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accept,
    Reject,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accept => f.write_str("accept"),
            Verdict::Reject => f.write_str("reject"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamLeadDecision {
    pub id: i64,
    pub applicant_id: Option<i64>,
    pub decision: Verdict,
    pub reason: String,
    pub reviewer_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl TeamLeadDecision {
    pub fn label(&self, applicant_username: Option<&str>) -> String {
        match applicant_username {
            Some(username) => format!("{} - Decision: {}", username, self.decision),
            None => format!("Decision: {} (No MeetingReview)", self.decision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_without_applicant() {
        let decision = TeamLeadDecision {
            id: 1,
            applicant_id: None,
            decision: Verdict::Reject,
            reason: "Not a fit".into(),
            reviewer_id: None,
            created_at: Utc::now(),
        };
        assert_eq!(decision.label(None), "Decision: reject (No MeetingReview)");
        assert_eq!(decision.label(Some("annlee")), "annlee - Decision: reject");
    }

    #[test]
    fn verdict_is_closed() {
        assert_eq!(serde_json::from_str::<Verdict>("\"accept\"").unwrap(), Verdict::Accept);
        assert!(serde_json::from_str::<Verdict>("\"maybe\"").is_err());
    }
}
