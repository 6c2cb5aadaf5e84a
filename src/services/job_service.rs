use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;
use crate::utils::slug::{claim_slug, next_available_slug, slugify, taken_slugs, SlugScope};

const FALLBACK_JOB_SLUG: &str = "job";

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

pub fn job_slug_base(job_name: &str) -> String {
    let slug = slugify(job_name);
    if slug.is_empty() {
        FALLBACK_JOB_SLUG.to_string()
    } else {
        slug
    }
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the job under the first free slug derived from its name. The
    /// unique index is the final arbiter: a concurrent writer that claims the
    /// same slug first makes this insert fail, and the slug is recomputed.
    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        payload.validate()?;
        let base = job_slug_base(&payload.job_name);

        let pool = &self.pool;
        let base = base.as_str();
        let job_payload = &payload;

        let job = claim_slug(
            SlugScope::Jobs,
            move || async move {
                let taken = taken_slugs(pool, SlugScope::Jobs, base).await?;
                Ok(next_available_slug(base, &taken))
            },
            move |slug| async move { self.insert(job_payload, &slug).await },
        )
        .await?;

        info!(job_id = job.id, slug = %job.slug, "Job created");
        Ok(job)
    }

    async fn insert(&self, payload: &CreateJobPayload, slug: &str) -> std::result::Result<Job, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (
                job_name, job_release_date, job_closing_date, job_location,
                about_company, project_role, project_role_desc, work_experience,
                must_have_skills, good_to_have_skills, job_requirements, qualifications,
                job_type, released_by, slug
            ) VALUES (
                $1,$2,$3,$4,
                $5,$6,$7,$8,
                $9,$10,$11,$12,
                $13,$14,$15
            )
            RETURNING *
            "#,
        )
        .bind(&payload.job_name)
        .bind(payload.job_release_date)
        .bind(payload.job_closing_date)
        .bind(&payload.job_location)
        .bind(&payload.about_company)
        .bind(&payload.project_role)
        .bind(&payload.project_role_desc)
        .bind(payload.work_experience)
        .bind(&payload.must_have_skills)
        .bind(&payload.good_to_have_skills)
        .bind(&payload.job_requirements)
        .bind(&payload.qualifications)
        .bind(payload.job_type)
        .bind(payload.released_by)
        .bind(slug)
        .fetch_one(&self.pool)
        .await
    }

    /// Renaming a job keeps its slug.
    pub async fn update(&self, id: i64, payload: UpdateJobPayload) -> Result<Job> {
        payload.validate()?;

        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET
                job_name = COALESCE($2, job_name),
                job_release_date = COALESCE($3, job_release_date),
                job_closing_date = COALESCE($4, job_closing_date),
                job_location = COALESCE($5, job_location),
                about_company = COALESCE($6, about_company),
                project_role = COALESCE($7, project_role),
                project_role_desc = COALESCE($8, project_role_desc),
                work_experience = COALESCE($9, work_experience),
                must_have_skills = COALESCE($10, must_have_skills),
                good_to_have_skills = COALESCE($11, good_to_have_skills),
                job_requirements = COALESCE($12, job_requirements),
                qualifications = COALESCE($13, qualifications),
                job_type = COALESCE($14, job_type),
                released_by = COALESCE($15, released_by)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.job_name)
        .bind(payload.job_release_date)
        .bind(payload.job_closing_date)
        .bind(&payload.job_location)
        .bind(&payload.about_company)
        .bind(&payload.project_role)
        .bind(&payload.project_role_desc)
        .bind(payload.work_experience)
        .bind(&payload.must_have_skills)
        .bind(&payload.good_to_have_skills)
        .bind(&payload.job_requirements)
        .bind(&payload.qualifications)
        .bind(payload.job_type)
        .bind(payload.released_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(job)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE slug = $1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;
        Ok(job)
    }

    pub async fn list(&self) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs ORDER BY job_release_date DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    /// Deletes the job and its applications. Profiles that released it keep
    /// existing with the reference cleared.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Job {} not found", id)));
        }
        info!(job_id = id, "Job deleted");
        Ok(())
    }
}
