use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::JobType;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1, max = 255))]
    pub job_name: String,
    pub job_release_date: NaiveDate,
    pub job_closing_date: NaiveDate,
    #[validate(length(min = 1, max = 255))]
    pub job_location: String,
    pub about_company: String,
    #[validate(length(min = 1, max = 255))]
    pub project_role: String,
    pub project_role_desc: String,
    #[validate(range(min = 0))]
    pub work_experience: i32,
    pub must_have_skills: String,
    pub good_to_have_skills: String,
    pub job_requirements: String,
    pub qualifications: String,
    pub job_type: JobType,
    pub released_by: Option<i64>,
}

/// Partial update. The slug is absent on purpose: it is fixed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1, max = 255))]
    pub job_name: Option<String>,
    pub job_release_date: Option<NaiveDate>,
    pub job_closing_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 255))]
    pub job_location: Option<String>,
    pub about_company: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub project_role: Option<String>,
    pub project_role_desc: Option<String>,
    #[validate(range(min = 0))]
    pub work_experience: Option<i32>,
    pub must_have_skills: Option<String>,
    pub good_to_have_skills: Option<String>,
    pub job_requirements: Option<String>,
    pub qualifications: Option<String>,
    pub job_type: Option<JobType>,
    pub released_by: Option<i64>,
}
