use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::meeting_dto::{CreateMeetingReviewPayload, UpdateMeetingReviewPayload};
use crate::error::{Error, Result};
use crate::models::meeting_review::MeetingReview;

#[derive(Clone)]
pub struct MeetingReviewService {
    pool: PgPool,
}

impl MeetingReviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateMeetingReviewPayload) -> Result<MeetingReview> {
        payload.validate()?;
        let review = sqlx::query_as::<_, MeetingReview>(
            r#"
            INSERT INTO meeting_reviews (meeting_schedule_id, reviewer_id, decision, reason)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(payload.meeting_schedule_id)
        .bind(payload.reviewer_id)
        .bind(&payload.decision)
        .bind(&payload.reason)
        .fetch_one(&self.pool)
        .await?;

        info!(
            review_id = review.id,
            meeting_schedule_id = review.meeting_schedule_id,
            decision = %review.decision,
            "Meeting review recorded"
        );
        Ok(review)
    }

    pub async fn update(&self, id: i64, payload: UpdateMeetingReviewPayload) -> Result<MeetingReview> {
        payload.validate()?;
        let review = sqlx::query_as::<_, MeetingReview>(
            r#"
            UPDATE meeting_reviews
            SET decision = COALESCE($2, decision), reason = COALESCE($3, reason)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.decision)
        .bind(&payload.reason)
        .fetch_one(&self.pool)
        .await?;
        Ok(review)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<MeetingReview> {
        let review =
            sqlx::query_as::<_, MeetingReview>("SELECT * FROM meeting_reviews WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(review)
    }

    pub async fn list_for_schedule(&self, meeting_schedule_id: i64) -> Result<Vec<MeetingReview>> {
        let reviews = sqlx::query_as::<_, MeetingReview>(
            "SELECT * FROM meeting_reviews WHERE meeting_schedule_id = $1 ORDER BY id",
        )
        .bind(meeting_schedule_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM meeting_reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Meeting review {} not found", id)));
        }
        Ok(())
    }
}
