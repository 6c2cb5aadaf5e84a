#![allow(dead_code)]

use chrono::NaiveDate;
use recruitment_records::database::pool::run_migrations;
use recruitment_records::dto::job_application_dto::CreateJobApplicationPayload;
use recruitment_records::dto::job_dto::CreateJobPayload;
use recruitment_records::dto::user_dto::CreateUserPayload;
use recruitment_records::models::job::JobType;
use recruitment_records::models::user::User;
use recruitment_records::services::user_service::UserService;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

/// Connects to `DATABASE_URL` and applies migrations. Database-backed tests
/// are `#[ignore]`d and run with `cargo test -- --ignored` against a
/// disposable database.
pub async fn test_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .expect("pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}

pub fn unique_tag() -> String {
    Uuid::new_v4().simple().to_string()[..10].to_string()
}

pub async fn seed_user(pool: &PgPool, prefix: &str) -> User {
    UserService::new(pool.clone())
        .create(CreateUserPayload {
            username: format!("{}_{}", prefix, unique_tag()),
            email: Some(format!("{}@example.com", prefix)),
            first_name: None,
            last_name: None,
        })
        .await
        .expect("seed user")
}

pub fn job_payload(name: &str, released_by: Option<i64>) -> CreateJobPayload {
    CreateJobPayload {
        job_name: name.to_string(),
        job_release_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        job_closing_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        job_location: "Remote".into(),
        about_company: "We build hiring tools.".into(),
        project_role: "Engineer".into(),
        project_role_desc: "Owns the record store.".into(),
        work_experience: 3,
        must_have_skills: "Rust, SQL".into(),
        good_to_have_skills: "Kubernetes".into(),
        job_requirements: "Ship things".into(),
        qualifications: "BSc or equivalent".into(),
        job_type: JobType::FullTime,
        released_by,
    }
}

pub fn application_payload(
    user_id: i64,
    job_id: Option<i64>,
    first_name: &str,
    last_name: &str,
) -> CreateJobApplicationPayload {
    CreateJobApplicationPayload {
        user_id,
        job_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        gender: "female".into(),
        username: format!("{}{}", first_name, last_name).to_lowercase(),
        email: "applicant@example.com".into(),
        phone: "+15550102030".into(),
        linkedin: "https://linkedin.com/in/applicant".into(),
        github: "https://github.com/applicant".into(),
        resume: "resumes/applicant.pdf".into(),
        referral_source: "LinkedIn".into(),
        current_city: "Austin".into(),
        postal_code: "73301".into(),
        available_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
    }
}
