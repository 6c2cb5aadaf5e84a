use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::job_application_dto::{CreateJobApplicationPayload, UpdateJobApplicationPayload};
use crate::error::{Error, Result};
use crate::models::job_application::JobApplication;
use crate::utils::slug::{
    application_slug_base, claim_slug, next_available_slug, taken_slugs, SlugScope,
};
use crate::utils::time;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct JobApplicationService {
    pool: PgPool,
}

impl JobApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateJobApplicationPayload) -> Result<JobApplication> {
        self.create_at(payload, time::now()).await
    }

    /// Persists an application first seen at `created_at`. The slug is
    /// `first-last-<unix seconds>` and gets a counter suffix when another
    /// application already holds it; it is never written again afterwards.
    pub async fn create_at(
        &self,
        payload: CreateJobApplicationPayload,
        created_at: DateTime<Utc>,
    ) -> Result<JobApplication> {
        payload.validate()?;
        let base = application_slug_base(
            &payload.first_name,
            &payload.last_name,
            time::unix_seconds(created_at),
        );

        let pool = &self.pool;
        let base = base.as_str();
        let application_payload = &payload;

        let application = claim_slug(
            SlugScope::JobApplications,
            move || async move {
                let taken = taken_slugs(pool, SlugScope::JobApplications, base).await?;
                Ok(next_available_slug(base, &taken))
            },
            move |slug| async move { self.insert(application_payload, created_at, &slug).await },
        )
        .await?;

        info!(
            application_id = application.id,
            job_id = ?application.job_id,
            slug = %application.slug,
            "Job application created"
        );
        Ok(application)
    }

    async fn insert(
        &self,
        payload: &CreateJobApplicationPayload,
        created_at: DateTime<Utc>,
        slug: &str,
    ) -> std::result::Result<JobApplication, sqlx::Error> {
        sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO job_applications (
                user_id, job_id, first_name, last_name, gender, username,
                email, phone, linkedin, github, resume, referral_source,
                current_city, postal_code, available_date, created_at, slug
            ) VALUES (
                $1,$2,$3,$4,$5,$6,
                $7,$8,$9,$10,$11,$12,
                $13,$14,$15,$16,$17
            )
            RETURNING *
            "#,
        )
        .bind(payload.user_id)
        .bind(payload.job_id)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.gender)
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.linkedin)
        .bind(&payload.github)
        .bind(&payload.resume)
        .bind(&payload.referral_source)
        .bind(&payload.current_city)
        .bind(&payload.postal_code)
        .bind(payload.available_date)
        .bind(created_at)
        .bind(slug)
        .fetch_one(&self.pool)
        .await
    }

    /// Edits any field except `slug` and `created_at`.
    pub async fn update(
        &self,
        id: i64,
        payload: UpdateJobApplicationPayload,
    ) -> Result<JobApplication> {
        validate(&payload, &[("phone", payload.phone.as_deref())])?;

        let application = sqlx::query_as::<_, JobApplication>(
            r#"
            UPDATE job_applications
            SET
                job_id = COALESCE($2, job_id),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                gender = COALESCE($5, gender),
                email = COALESCE($6, email),
                phone = COALESCE($7, phone),
                linkedin = COALESCE($8, linkedin),
                github = COALESCE($9, github),
                resume = COALESCE($10, resume),
                referral_source = COALESCE($11, referral_source),
                current_city = COALESCE($12, current_city),
                postal_code = COALESCE($13, postal_code),
                available_date = COALESCE($14, available_date),
                is_accepted = COALESCE($15, is_accepted)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.job_id)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.gender)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.linkedin)
        .bind(&payload.github)
        .bind(&payload.resume)
        .bind(&payload.referral_source)
        .bind(&payload.current_city)
        .bind(&payload.postal_code)
        .bind(payload.available_date)
        .bind(payload.is_accepted)
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    pub async fn set_accepted(&self, id: i64, accepted: bool) -> Result<JobApplication> {
        let application = sqlx::query_as::<_, JobApplication>(
            "UPDATE job_applications SET is_accepted = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(accepted)
        .fetch_one(&self.pool)
        .await?;
        info!(application_id = id, accepted, "Application acceptance changed");
        Ok(application)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<JobApplication> {
        let application =
            sqlx::query_as::<_, JobApplication>("SELECT * FROM job_applications WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(application)
    }

    /// Detail-view lookup; a missing slug is `Error::NotFound`.
    pub async fn get_by_slug(&self, slug: &str) -> Result<JobApplication> {
        let application =
            sqlx::query_as::<_, JobApplication>("SELECT * FROM job_applications WHERE slug = $1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?;
        application.ok_or_else(|| Error::NotFound(format!("No applicant with slug '{}'", slug)))
    }

    pub async fn list_for_job(&self, job_id: i64) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(
            "SELECT * FROM job_applications WHERE job_id = $1 ORDER BY created_at DESC",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(
            "SELECT * FROM job_applications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }

    pub async fn list(&self) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(
            "SELECT * FROM job_applications ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Job application {} not found", id)));
        }
        Ok(())
    }
}
