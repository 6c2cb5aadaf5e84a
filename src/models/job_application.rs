use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Route prefix of the canonical applicant detail view.
pub const APPLICANT_DETAIL_PREFIX: &str = "/applicants";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
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
}

impl JobApplication {
    pub fn absolute_url(&self) -> String {
        format!("{}/{}", APPLICANT_DETAIL_PREFIX, self.slug)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `None` for orphaned applications whose job was never set.
    pub fn label(&self, job_name: Option<&str>) -> String {
        match job_name {
            Some(name) => format!("{} - {}", self.full_name(), name),
            None => self.full_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn application() -> JobApplication {
        JobApplication {
            id: 7,
            user_id: 3,
            job_id: None,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            gender: "female".into(),
            username: "annlee".into(),
            email: "ann@example.com".into(),
            phone: "+15550102030".into(),
            linkedin: "https://linkedin.com/in/annlee".into(),
            github: "https://github.com/annlee".into(),
            resume: "resumes/ann.pdf".into(),
            referral_source: "LinkedIn".into(),
            current_city: "Austin".into(),
            postal_code: "73301".into(),
            available_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            created_at: Utc.timestamp_opt(1717243200, 0).unwrap(),
            is_accepted: false,
            slug: "ann-lee-1717243200".into(),
        }
    }

    #[test]
    fn label_includes_job_name_when_present() {
        let app = application();
        assert_eq!(app.label(Some("Backend Engineer")), "Ann Lee - Backend Engineer");
        assert_eq!(app.label(None), "Ann Lee");
    }

    #[test]
    fn absolute_url_is_keyed_by_slug() {
        assert_eq!(application().absolute_url(), "/applicants/ann-lee-1717243200");
    }
}
