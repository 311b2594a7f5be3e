use crate::domain::{models::user::{User, ExternalIdentity, ProfileUpdate, ROLE_CLIENT}, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

const USER_COLUMNS: &str = "id, external_id, first_name, last_name, username, role, phone, created_at, updated_at";

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepo {
    async fn resolve_or_create(&self, identity: &ExternalIdentity) -> Result<(User, bool), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let existing = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE external_id = $1", USER_COLUMNS))
            .bind(identity.external_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::from)?;

        if let Some(user) = existing {
            tx.commit().await.map_err(AppError::from)?;
            return Ok((user, false));
        }

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (external_id, first_name, last_name, username, role, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (external_id) DO NOTHING"
        )
            .bind(identity.external_id)
            .bind(&identity.first_name)
            .bind(&identity.last_name)
            .bind(&identity.username)
            .bind(ROLE_CLIENT)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;

        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE external_id = $1", USER_COLUMNS))
            .bind(identity.external_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::from)?;

        tx.commit().await.map_err(AppError::from)?;
        Ok((user, result.rows_affected() > 0))
    }

    async fn find_by_external_id(&self, external_id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE external_id = $1", USER_COLUMNS))
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET first_name = $1, last_name = $2, phone = $3, updated_at = $4 WHERE id = $5")
            .bind(&update.first_name)
            .bind(&update.last_name)
            .bind(&update.phone)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
