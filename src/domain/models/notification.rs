use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

pub const TYPE_BOOKING_CREATED: &str = "booking_created";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub booking_id: Option<i64>,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification content written alongside the row it refers to.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub user_id: i64,
    pub kind: String,
    pub title: String,
    pub message: String,
}

impl NotificationDraft {
    pub fn booking_created(user_id: i64, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            user_id,
            kind: TYPE_BOOKING_CREATED.to_string(),
            title: "Booking created".to_string(),
            message: format!(
                "Your booking on {} at {} has been created",
                date.format("%Y-%m-%d"),
                time.format("%H:%M")
            ),
        }
    }
}
