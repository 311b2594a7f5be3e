use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

pub const DEFAULT_DURATION_MIN: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: i64,
    pub client_id: i64,
    pub master_id: i64,
    pub service_id: i64,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled.as_str()
    }
}

pub struct NewBooking {
    pub client_id: i64,
    pub master_id: i64,
    pub service_id: i64,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_min: i64,
    pub notes: String,
}

impl NewBooking {
    /// End of the appointment on the clock face. Wraps past midnight.
    /// `None` when the duration cannot be represented.
    pub fn end_time(&self) -> Option<NaiveTime> {
        let duration = Duration::try_minutes(self.duration_min)?;
        let (end, _) = self.start_time.overflowing_add_signed(duration);
        Some(end)
    }
}

/// A client's booking joined with the master's name and the service.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BookingSummary {
    pub id: i64,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub notes: Option<String>,
    pub master_name: String,
    pub service_name: String,
    pub price: f64,
}
