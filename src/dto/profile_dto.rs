use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateProfilePayload {
    pub user_id: i64,
    #[validate(length(max = 255))]
    pub profile_pic: Option<String>,
    pub about: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_hr: bool,
    #[serde(default)]
    pub is_teamlead: bool,
    #[serde(default)]
    pub is_manager: bool,
    #[serde(default)]
    pub is_main_hr: bool,
    #[serde(default)]
    pub is_team_member: bool,
    #[serde(default)]
    pub is_onboarding_hr: bool,
    pub released_job_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfilePayload {
    #[validate(length(max = 255))]
    pub profile_pic: Option<String>,
    pub about: Option<String>,
    pub phone: Option<String>,
    pub is_hr: Option<bool>,
    pub is_teamlead: Option<bool>,
    pub is_manager: Option<bool>,
    pub is_main_hr: Option<bool>,
    pub is_team_member: Option<bool>,
    pub is_onboarding_hr: Option<bool>,
    pub released_job_id: Option<i64>,
}
