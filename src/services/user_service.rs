use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::user_dto::CreateUserPayload;
use crate::error::{Error, Result};
use crate::models::user::User;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        payload.validate()?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&payload.username)
        .bind(payload.email.unwrap_or_default())
        .bind(payload.first_name.unwrap_or_default())
        .bind(payload.last_name.unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;

        info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Removes the user together with every profile, application, meeting,
    /// review and team-lead decision that hangs off it. References where the
    /// user only acted (released jobs, scheduler, reviewer) are cleared.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("User {} not found", id)));
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
