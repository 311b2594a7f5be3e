use crate::domain::{models::schedule::MasterSchedule, ports::ScheduleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteScheduleRepo {
    pool: SqlitePool,
}

impl SqliteScheduleRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepo {
    async fn find_active(&self, master_id: i64, day_of_week: i32) -> Result<Option<MasterSchedule>, AppError> {
        sqlx::query_as::<_, MasterSchedule>(
            "SELECT id, master_id, day_of_week, start_time, end_time, is_active FROM master_schedule
             WHERE master_id = ? AND day_of_week = ? AND is_active = 1
             ORDER BY id ASC LIMIT 1"
        )
            .bind(master_id)
            .bind(day_of_week)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }
}
