use sqlx::PgPool;
use tracing::debug;
use validator::Validate;

use crate::dto::email_log_dto::{CreateEmailLogPayload, EmailLogQuery};
use crate::error::{Error, Result};
use crate::models::email_log::EmailLog;

#[derive(Clone)]
pub struct EmailLogService {
    pool: PgPool,
}

impl EmailLogService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records a mail the transport already sent; nothing is delivered here.
    pub async fn record(&self, payload: CreateEmailLogPayload) -> Result<EmailLog> {
        payload.validate()?;
        let log = sqlx::query_as::<_, EmailLog>(
            r#"
            INSERT INTO email_logs (applicant, sender_name, to_email, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.applicant)
        .bind(&payload.sender_name)
        .bind(&payload.to_email)
        .bind(&payload.subject)
        .bind(&payload.message)
        .fetch_one(&self.pool)
        .await?;

        debug!(email_log_id = log.id, to = %log.to_email, "Email logged");
        Ok(log)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<EmailLog> {
        let log = sqlx::query_as::<_, EmailLog>("SELECT * FROM email_logs WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(log)
    }

    /// Newest first, optionally narrowed to one applicant name.
    pub async fn list(&self, query: EmailLogQuery) -> Result<Vec<EmailLog>> {
        let limit = query.limit.unwrap_or(50).clamp(1, 500);
        let logs = sqlx::query_as::<_, EmailLog>(
            r#"
            SELECT * FROM email_logs
            WHERE ($1::text IS NULL OR applicant = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(&query.applicant)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM email_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Email log {} not found", id)));
        }
        Ok(())
    }
}
