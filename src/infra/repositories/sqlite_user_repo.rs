use crate::domain::{models::user::{User, ExternalIdentity, ProfileUpdate, ROLE_CLIENT}, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

const USER_COLUMNS: &str = "id, external_id, first_name, last_name, username, role, phone, created_at, updated_at";

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn resolve_or_create(&self, identity: &ExternalIdentity) -> Result<(User, bool), AppError> {
        // Insert before reading so the write lock is taken first.
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (external_id, first_name, last_name, username, role, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
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

        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE external_id = ?", USER_COLUMNS))
            .bind(identity.external_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::from)?;

        tx.commit().await.map_err(AppError::from)?;
        Ok((user, result.rows_affected() > 0))
    }

    async fn find_by_external_id(&self, external_id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE external_id = ?", USER_COLUMNS))
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET first_name = ?, last_name = ?, phone = ?, updated_at = ? WHERE id = ?")
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
