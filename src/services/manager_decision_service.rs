use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::decision_dto::{CreateManagerDecisionPayload, UpdateManagerDecisionPayload};
use crate::error::{Error, Result};
use crate::models::manager_decision::ManagerDecision;

#[derive(Clone)]
pub struct ManagerDecisionService {
    pool: PgPool,
}

impl ManagerDecisionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateManagerDecisionPayload) -> Result<ManagerDecision> {
        payload.validate()?;
        let decision = sqlx::query_as::<_, ManagerDecision>(
            r#"
            INSERT INTO manager_decisions (
                applicant, decision, reason, approved_by_manager,
                meeting_link, meeting_date, meeting_time, email
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&payload.applicant)
        .bind(&payload.decision)
        .bind(&payload.reason)
        .bind(payload.approved_by_manager)
        .bind(&payload.meeting_link)
        .bind(payload.meeting_date)
        .bind(payload.meeting_time)
        .bind(&payload.email)
        .fetch_one(&self.pool)
        .await?;

        info!(
            decision_id = decision.id,
            applicant = %decision.applicant,
            approved = decision.approved_by_manager,
            "Manager decision recorded"
        );
        Ok(decision)
    }

    pub async fn update(&self, id: i64, payload: UpdateManagerDecisionPayload) -> Result<ManagerDecision> {
        payload.validate()?;
        let decision = sqlx::query_as::<_, ManagerDecision>(
            r#"
            UPDATE manager_decisions
            SET
                decision = COALESCE($2, decision),
                reason = COALESCE($3, reason),
                approved_by_manager = COALESCE($4, approved_by_manager),
                meeting_link = COALESCE($5, meeting_link),
                meeting_date = COALESCE($6, meeting_date),
                meeting_time = COALESCE($7, meeting_time),
                email = COALESCE($8, email)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.decision)
        .bind(&payload.reason)
        .bind(payload.approved_by_manager)
        .bind(&payload.meeting_link)
        .bind(payload.meeting_date)
        .bind(payload.meeting_time)
        .bind(&payload.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(decision)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ManagerDecision> {
        let decision =
            sqlx::query_as::<_, ManagerDecision>("SELECT * FROM manager_decisions WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(decision)
    }

    /// Exact match on the free-text applicant name.
    pub async fn list_for_applicant(&self, applicant: &str) -> Result<Vec<ManagerDecision>> {
        let decisions = sqlx::query_as::<_, ManagerDecision>(
            "SELECT * FROM manager_decisions WHERE applicant = $1 ORDER BY created_at DESC",
        )
        .bind(applicant)
        .fetch_all(&self.pool)
        .await?;
        Ok(decisions)
    }

    pub async fn list(&self) -> Result<Vec<ManagerDecision>> {
        let decisions = sqlx::query_as::<_, ManagerDecision>(
            "SELECT * FROM manager_decisions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(decisions)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM manager_decisions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Manager decision {} not found", id)));
        }
        Ok(())
    }
}
