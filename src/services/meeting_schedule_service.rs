use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::meeting_dto::{CreateMeetingSchedulePayload, UpdateMeetingSchedulePayload};
use crate::error::{Error, Result};
use crate::models::meeting_schedule::MeetingSchedule;
use crate::models::user::User;

#[derive(Clone)]
pub struct MeetingScheduleService {
    pool: PgPool,
}

impl MeetingScheduleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the schedule and its attendee set in one transaction.
    pub async fn create(&self, payload: CreateMeetingSchedulePayload) -> Result<MeetingSchedule> {
        payload.validate()?;
        let mut tx = self.pool.begin().await?;

        let schedule = sqlx::query_as::<_, MeetingSchedule>(
            r#"
            INSERT INTO meeting_schedules (
                job_application_id, scheduled_by, scheduled_meet_date,
                scheduled_meet_time, scheduled_meet_link
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(payload.job_application_id)
        .bind(payload.scheduled_by)
        .bind(payload.scheduled_meet_date)
        .bind(payload.scheduled_meet_time)
        .bind(&payload.scheduled_meet_link)
        .fetch_one(&mut *tx)
        .await?;

        if !payload.attendee_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO meeting_schedule_attendees (meeting_schedule_id, user_id)
                SELECT $1, UNNEST($2::bigint[])
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(schedule.id)
            .bind(&payload.attendee_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!(
            meeting_schedule_id = schedule.id,
            job_application_id = schedule.job_application_id,
            attendees = payload.attendee_ids.len(),
            "Meeting scheduled"
        );
        Ok(schedule)
    }

    pub async fn update(&self, id: i64, payload: UpdateMeetingSchedulePayload) -> Result<MeetingSchedule> {
        payload.validate()?;
        let schedule = sqlx::query_as::<_, MeetingSchedule>(
            r#"
            UPDATE meeting_schedules
            SET
                scheduled_by = COALESCE($2, scheduled_by),
                scheduled_meet_date = COALESCE($3, scheduled_meet_date),
                scheduled_meet_time = COALESCE($4, scheduled_meet_time),
                scheduled_meet_link = COALESCE($5, scheduled_meet_link)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.scheduled_by)
        .bind(payload.scheduled_meet_date)
        .bind(payload.scheduled_meet_time)
        .bind(&payload.scheduled_meet_link)
        .fetch_one(&self.pool)
        .await?;
        Ok(schedule)
    }

    /// Replaces the attendee set wholesale.
    pub async fn set_attendees(&self, id: i64, attendee_ids: &[i64]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM meeting_schedules WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Err(Error::NotFound(format!("Meeting schedule {} not found", id)));
        }

        sqlx::query("DELETE FROM meeting_schedule_attendees WHERE meeting_schedule_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if !attendee_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO meeting_schedule_attendees (meeting_schedule_id, user_id)
                SELECT $1, UNNEST($2::bigint[])
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(id)
            .bind(attendee_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn attendees(&self, id: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT u.*
            FROM users u
            JOIN meeting_schedule_attendees a ON a.user_id = u.id
            WHERE a.meeting_schedule_id = $1
            ORDER BY u.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<MeetingSchedule> {
        let schedule =
            sqlx::query_as::<_, MeetingSchedule>("SELECT * FROM meeting_schedules WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(schedule)
    }

    pub async fn list(&self) -> Result<Vec<MeetingSchedule>> {
        let schedules = sqlx::query_as::<_, MeetingSchedule>(
            "SELECT * FROM meeting_schedules ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(schedules)
    }

    pub async fn list_for_application(&self, job_application_id: i64) -> Result<Vec<MeetingSchedule>> {
        let schedules = sqlx::query_as::<_, MeetingSchedule>(
            r#"
            SELECT * FROM meeting_schedules
            WHERE job_application_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(job_application_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(schedules)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM meeting_schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Meeting schedule {} not found", id)));
        }
        Ok(())
    }
}
