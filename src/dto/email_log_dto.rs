use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmailLogPayload {
    #[validate(length(max = 255))]
    pub applicant: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub sender_name: String,
    #[validate(email)]
    pub to_email: String,
    #[validate(length(min = 1, max = 255))]
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailLogQuery {
    pub applicant: Option<String>,
    pub limit: Option<i64>,
}
