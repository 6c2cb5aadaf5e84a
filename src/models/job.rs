use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_type")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::FullTime, JobType::PartTime, JobType::Internship];

    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "FullTime",
            JobType::PartTime => "PartTime",
            JobType::Internship => "Internship",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                Error::BadRequest(format!(
                    "Invalid job type '{}', expected one of FullTime, PartTime, Internship",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i64,
    pub job_name: String,
    pub job_release_date: NaiveDate,
    pub job_closing_date: NaiveDate,
    pub job_location: String,
    pub about_company: String,
    pub project_role: String,
    pub project_role_desc: String,
    pub work_experience: i32,
    pub must_have_skills: String,
    pub good_to_have_skills: String,
    pub job_requirements: String,
    pub qualifications: String,
    pub job_type: JobType,
    pub released_by: Option<i64>,
    pub slug: String,
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.job_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_parses_closed_set_only() {
        assert_eq!("FullTime".parse::<JobType>().unwrap(), JobType::FullTime);
        assert_eq!("Internship".parse::<JobType>().unwrap(), JobType::Internship);
        assert!("Contract".parse::<JobType>().is_err());
        assert!("fulltime".parse::<JobType>().is_err());
    }

    #[test]
    fn job_type_rejects_unknown_json() {
        let ok: JobType = serde_json::from_str("\"PartTime\"").unwrap();
        assert_eq!(ok, JobType::PartTime);
        assert!(serde_json::from_str::<JobType>("\"Freelance\"").is_err());
    }
}
