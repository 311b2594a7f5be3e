use crate::domain::models::{
    user::{User, ExternalIdentity, ProfileUpdate},
    schedule::MasterSchedule,
    booking::{Booking, BookingSummary, NewBooking},
    notification::{Notification, NotificationDraft},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the user for `identity.external_id`, inserting it first if it
    /// does not exist. The flag is true when this call performed the insert.
    async fn resolve_or_create(&self, identity: &ExternalIdentity) -> Result<(User, bool), AppError>;
    async fn find_by_external_id(&self, external_id: i64) -> Result<Option<User>, AppError>;
    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<(), AppError>;
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn find_active(&self, master_id: i64, day_of_week: i32) -> Result<Option<MasterSchedule>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_with_notification(&self, booking: &NewBooking, end_time: NaiveTime, notification: &NotificationDraft) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, AppError>;
    async fn list_active_for_master(&self, master_id: i64, date: NaiveDate) -> Result<Vec<Booking>, AppError>;
    async fn list_for_client(&self, client_id: i64, limit: i64) -> Result<Vec<BookingSummary>, AppError>;
    async fn count_for_client(&self, client_id: i64) -> Result<i64, AppError>;
    async fn cancel(&self, id: i64) -> Result<u64, AppError>;
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn list_for_user(&self, user_id: i64, limit: i64) -> Result<Vec<Notification>, AppError>;
    async fn count_unread(&self, user_id: i64) -> Result<i64, AppError>;
    async fn mark_read(&self, id: i64, user_id: i64) -> Result<u64, AppError>;
    async fn mark_all_read(&self, user_id: i64) -> Result<u64, AppError>;
}
