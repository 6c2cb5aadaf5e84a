use sqlx::{FromRow, PgPool};

use crate::error::Result;
use crate::models::email_log::EmailLog;
use crate::models::job::Job;
use crate::models::job_application::JobApplication;
use crate::models::manager_decision::ManagerDecision;
use crate::models::meeting_review::MeetingReview;
use crate::models::meeting_schedule::MeetingSchedule;
use crate::models::profile::Profile;
use crate::models::record_label::{RecordKind, RecordLabel};
use crate::models::team_lead_decision::TeamLeadDecision;

#[derive(FromRow)]
struct ApplicationWithJob {
    #[sqlx(flatten)]
    application: JobApplication,
    job_name: Option<String>,
}

#[derive(FromRow)]
struct DecisionWithApplicant {
    #[sqlx(flatten)]
    decision: TeamLeadDecision,
    applicant_username: Option<String>,
}

/// Human-readable listings of every record kind, with whatever related rows
/// each label needs joined in.
#[derive(Clone)]
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn labels(&self, kind: RecordKind) -> Result<Vec<RecordLabel>> {
        match kind {
            RecordKind::Profile => self.profile_labels().await,
            RecordKind::Job => self.job_labels().await,
            RecordKind::JobApplication => self.application_labels().await,
            RecordKind::MeetingSchedule => self.schedule_labels().await,
            RecordKind::MeetingReview => self.review_labels().await,
            RecordKind::TeamLeadDecision => self.team_lead_labels().await,
            RecordKind::ManagerDecision => self.manager_labels().await,
            RecordKind::EmailLog => self.email_labels().await,
        }
    }

    async fn profile_labels(&self) -> Result<Vec<RecordLabel>> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            r#"
            SELECT p.id, u.username
            FROM profiles p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, username)| RecordLabel { id, label: Profile::label(&username) })
            .collect())
    }

    async fn job_labels(&self) -> Result<Vec<RecordLabel>> {
        let jobs = sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs
            .into_iter()
            .map(|job| RecordLabel { id: job.id, label: job.to_string() })
            .collect())
    }

    async fn application_labels(&self) -> Result<Vec<RecordLabel>> {
        let rows = sqlx::query_as::<_, ApplicationWithJob>(
            r#"
            SELECT a.*, j.job_name
            FROM job_applications a
            LEFT JOIN jobs j ON j.id = a.job_id
            ORDER BY a.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|row| RecordLabel {
                id: row.application.id,
                label: row.application.label(row.job_name.as_deref()),
            })
            .collect())
    }

    async fn schedule_labels(&self) -> Result<Vec<RecordLabel>> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            r#"
            SELECT s.id, u.username
            FROM meeting_schedules s
            JOIN job_applications a ON a.id = s.job_application_id
            JOIN users u ON u.id = a.user_id
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, username)| RecordLabel { id, label: MeetingSchedule::label(&username) })
            .collect())
    }

    async fn review_labels(&self) -> Result<Vec<RecordLabel>> {
        let rows: Vec<(i64, String, String)> = sqlx::query_as(
            r#"
            SELECT r.id, a.first_name, a.last_name
            FROM meeting_reviews r
            JOIN meeting_schedules s ON s.id = r.meeting_schedule_id
            JOIN job_applications a ON a.id = s.job_application_id
            ORDER BY r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, first, last)| RecordLabel { id, label: MeetingReview::label(&first, &last) })
            .collect())
    }

    async fn team_lead_labels(&self) -> Result<Vec<RecordLabel>> {
        let rows = sqlx::query_as::<_, DecisionWithApplicant>(
            r#"
            SELECT d.*, u.username AS applicant_username
            FROM team_lead_decisions d
            LEFT JOIN users u ON u.id = d.applicant_id
            ORDER BY d.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|row| RecordLabel {
                id: row.decision.id,
                label: row.decision.label(row.applicant_username.as_deref()),
            })
            .collect())
    }

    async fn manager_labels(&self) -> Result<Vec<RecordLabel>> {
        let decisions =
            sqlx::query_as::<_, ManagerDecision>("SELECT * FROM manager_decisions ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(decisions
            .into_iter()
            .map(|d| RecordLabel { id: d.id, label: d.to_string() })
            .collect())
    }

    async fn email_labels(&self) -> Result<Vec<RecordLabel>> {
        let logs = sqlx::query_as::<_, EmailLog>("SELECT * FROM email_logs ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(logs
            .into_iter()
            .map(|log| RecordLabel { id: log.id, label: log.to_string() })
            .collect())
    }
}
