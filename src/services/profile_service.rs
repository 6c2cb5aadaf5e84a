use sqlx::PgPool;
use tracing::info;

use crate::dto::profile_dto::{CreateProfilePayload, UpdateProfilePayload};
use crate::error::{Error, Result};
use crate::models::profile::{Profile, Role};
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fails with a conflict when the user already has a profile.
    pub async fn create(&self, payload: CreateProfilePayload) -> Result<Profile> {
        validate(&payload, &[("phone", payload.phone.as_deref())])?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (
                user_id, profile_pic, about, phone,
                is_hr, is_teamlead, is_manager, is_main_hr, is_team_member, is_onboarding_hr,
                released_job_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(payload.user_id)
        .bind(&payload.profile_pic)
        .bind(&payload.about)
        .bind(&payload.phone)
        .bind(payload.is_hr)
        .bind(payload.is_teamlead)
        .bind(payload.is_manager)
        .bind(payload.is_main_hr)
        .bind(payload.is_team_member)
        .bind(payload.is_onboarding_hr)
        .bind(payload.released_job_id)
        .fetch_one(&self.pool)
        .await?;

        info!(profile_id = profile.id, user_id = profile.user_id, "Profile created");
        Ok(profile)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(profile)
    }

    pub async fn get_for_user(&self, user_id: i64) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(profile)
    }

    pub async fn list(&self) -> Result<Vec<Profile>> {
        let profiles = sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(profiles)
    }

    pub async fn list_with_role(&self, role: Role) -> Result<Vec<Profile>> {
        let query = format!(
            "SELECT * FROM profiles WHERE {} = TRUE ORDER BY id",
            role.column()
        );
        let profiles = sqlx::query_as::<_, Profile>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(profiles)
    }

    pub async fn update(&self, id: i64, payload: UpdateProfilePayload) -> Result<Profile> {
        validate(&payload, &[("phone", payload.phone.as_deref())])?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET
                profile_pic = COALESCE($2, profile_pic),
                about = COALESCE($3, about),
                phone = COALESCE($4, phone),
                is_hr = COALESCE($5, is_hr),
                is_teamlead = COALESCE($6, is_teamlead),
                is_manager = COALESCE($7, is_manager),
                is_main_hr = COALESCE($8, is_main_hr),
                is_team_member = COALESCE($9, is_team_member),
                is_onboarding_hr = COALESCE($10, is_onboarding_hr),
                released_job_id = COALESCE($11, released_job_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.profile_pic)
        .bind(&payload.about)
        .bind(&payload.phone)
        .bind(payload.is_hr)
        .bind(payload.is_teamlead)
        .bind(payload.is_manager)
        .bind(payload.is_main_hr)
        .bind(payload.is_team_member)
        .bind(payload.is_onboarding_hr)
        .bind(payload.released_job_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Points the profile at a stored picture reference.
    pub async fn set_picture(&self, id: i64, reference: &str) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET profile_pic = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(reference)
        .fetch_one(&self.pool)
        .await?;
        Ok(profile)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Profile {} not found", id)));
        }
        Ok(())
    }
}
