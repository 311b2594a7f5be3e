use serde::Deserialize;
use crate::domain::models::user::ExternalIdentity;
use crate::error::AppError;

/// Profile object supplied by the messaging platform, either in the
/// `X-Telegram-User` header or in a request body.
#[derive(Debug, Deserialize, Default)]
pub struct ExternalProfile {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl ExternalProfile {
    pub fn into_identity(self) -> Result<ExternalIdentity, AppError> {
        match self.id {
            Some(id) if id != 0 => Ok(ExternalIdentity::new(id, self.first_name, self.last_name, self.username)),
            _ => Err(AppError::Unauthorized),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub telegram_user: Option<ExternalProfile>,
    pub master_id: i64,
    pub service_id: i64,
    pub date: String,
    pub time: String,
    pub duration: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    Cancel,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub action: Option<BookingAction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    pub notification_id: Option<i64>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationAction {
    MarkAllRead,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub struct NotificationActionRequest {
    #[serde(default)]
    pub action: Option<NotificationAction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}
