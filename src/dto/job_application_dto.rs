use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job_application::JobApplication;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobApplicationPayload {
    pub user_id: i64,
    pub job_id: Option<i64>,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 20))]
    pub gender: String,
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(custom(function = "crate::utils::validation::validate_phone"))]
    pub phone: String,
    #[validate(url, length(max = 200))]
    pub linkedin: String,
    #[validate(url, length(max = 200))]
    pub github: String,
    #[validate(length(min = 1, max = 255))]
    pub resume: String,
    #[validate(length(min = 1, max = 100))]
    pub referral_source: String,
    #[validate(length(min = 1, max = 100))]
    pub current_city: String,
    #[validate(length(min = 1, max = 10))]
    pub postal_code: String,
    pub available_date: NaiveDate,
}

/// Partial update. Neither the slug nor the creation timestamp can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobApplicationPayload {
    pub job_id: Option<i64>,
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub gender: Option<String>,
    #[validate(email, length(max = 100))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(url, length(max = 200))]
    pub linkedin: Option<String>,
    #[validate(url, length(max = 200))]
    pub github: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub resume: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub referral_source: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub current_city: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub postal_code: Option<String>,
    pub available_date: Option<NaiveDate>,
    pub is_accepted: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantDetailResponse {
    pub id: i64,
    pub user_id: i64,
    pub job_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub resume: String,
    pub referral_source: String,
    pub current_city: String,
    pub postal_code: String,
    pub available_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub is_accepted: bool,
    pub slug: String,
    pub url: String,
}

impl From<JobApplication> for ApplicantDetailResponse {
    fn from(value: JobApplication) -> Self {
        let url = value.absolute_url();
        Self {
            id: value.id,
            user_id: value.user_id,
            job_id: value.job_id,
            first_name: value.first_name,
            last_name: value.last_name,
            gender: value.gender,
            username: value.username,
            email: value.email,
            phone: value.phone,
            linkedin: value.linkedin,
            github: value.github,
            resume: value.resume,
            referral_source: value.referral_source,
            current_city: value.current_city,
            postal_code: value.postal_code,
            available_date: value.available_date,
            created_at: value.created_at,
            is_accepted: value.is_accepted,
            slug: value.slug,
            url,
        }
    }
}
