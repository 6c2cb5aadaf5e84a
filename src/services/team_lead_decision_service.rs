use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::decision_dto::{CreateTeamLeadDecisionPayload, UpdateTeamLeadDecisionPayload};
use crate::error::{Error, Result};
use crate::models::team_lead_decision::TeamLeadDecision;

#[derive(Clone)]
pub struct TeamLeadDecisionService {
    pool: PgPool,
}

impl TeamLeadDecisionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records the decision. A second decision for the same applicant is a
    /// conflict; no earlier pipeline step is required to exist.
    pub async fn create(&self, payload: CreateTeamLeadDecisionPayload) -> Result<TeamLeadDecision> {
        payload.validate()?;
        let decision = sqlx::query_as::<_, TeamLeadDecision>(
            r#"
            INSERT INTO team_lead_decisions (applicant_id, decision, reason, reviewer_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(payload.applicant_id)
        .bind(payload.decision)
        .bind(&payload.reason)
        .bind(payload.reviewer_id)
        .fetch_one(&self.pool)
        .await?;

        info!(
            decision_id = decision.id,
            applicant_id = ?decision.applicant_id,
            decision = %decision.decision,
            "Team lead decision recorded"
        );
        Ok(decision)
    }

    pub async fn update(&self, id: i64, payload: UpdateTeamLeadDecisionPayload) -> Result<TeamLeadDecision> {
        payload.validate()?;
        let decision = sqlx::query_as::<_, TeamLeadDecision>(
            r#"
            UPDATE team_lead_decisions
            SET decision = COALESCE($2, decision), reason = COALESCE($3, reason)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.decision)
        .bind(&payload.reason)
        .fetch_one(&self.pool)
        .await?;
        Ok(decision)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<TeamLeadDecision> {
        let decision = sqlx::query_as::<_, TeamLeadDecision>(
            "SELECT * FROM team_lead_decisions WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(decision)
    }

    pub async fn get_for_applicant(&self, applicant_id: i64) -> Result<Option<TeamLeadDecision>> {
        let decision = sqlx::query_as::<_, TeamLeadDecision>(
            "SELECT * FROM team_lead_decisions WHERE applicant_id = $1",
        )
        .bind(applicant_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(decision)
    }

    pub async fn list(&self) -> Result<Vec<TeamLeadDecision>> {
        let decisions = sqlx::query_as::<_, TeamLeadDecision>(
            "SELECT * FROM team_lead_decisions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(decisions)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM team_lead_decisions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Team lead decision {} not found", id)));
        }
        Ok(())
    }
}
