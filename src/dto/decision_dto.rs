use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::team_lead_decision::Verdict;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamLeadDecisionPayload {
    pub applicant_id: Option<i64>,
    pub decision: Verdict,
    pub reason: String,
    pub reviewer_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTeamLeadDecisionPayload {
    pub decision: Option<Verdict>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateManagerDecisionPayload {
    #[validate(length(min = 1, max = 255))]
    pub applicant: String,
    #[validate(length(max = 50))]
    pub decision: Option<String>,
    pub reason: Option<String>,
    #[serde(default)]
    pub approved_by_manager: bool,
    #[validate(url, length(max = 200))]
    pub meeting_link: Option<String>,
    pub meeting_date: Option<NaiveDate>,
    pub meeting_time: Option<NaiveTime>,
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateManagerDecisionPayload {
    #[validate(length(max = 50))]
    pub decision: Option<String>,
    pub reason: Option<String>,
    pub approved_by_manager: Option<bool>,
    #[validate(url, length(max = 200))]
    pub meeting_link: Option<String>,
    pub meeting_date: Option<NaiveDate>,
    pub meeting_time: Option<NaiveTime>,
    #[validate(email)]
    pub email: Option<String>,
}
