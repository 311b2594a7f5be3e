use serde::{Deserialize, Serialize};
use chrono::NaiveTime;
use sqlx::FromRow;

/// Working hours of a master on one ISO weekday (1 = Monday .. 7 = Sunday).
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MasterSchedule {
    pub id: i64,
    pub master_id: i64,
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
}
