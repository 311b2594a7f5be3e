use serde::Serialize;
use crate::domain::models::{booking::BookingSummary, notification::Notification, user::Profile};

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub slots: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub success: bool,
    pub booking_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub end_time: String,
    pub status: String,
    pub master_name: String,
    pub service_name: String,
    pub price: f64,
    pub notes: Option<String>,
}

impl From<BookingSummary> for BookingView {
    fn from(b: BookingSummary) -> Self {
        Self {
            id: b.id,
            date: b.booking_date.format("%Y-%m-%d").to_string(),
            time: b.start_time.format("%H:%M").to_string(),
            end_time: b.end_time.format("%H:%M").to_string(),
            status: b.status,
            master_name: b.master_name,
            service_name: b.service_name,
            price: b.price,
            notes: b.notes,
        }
    }
}

#[derive(Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<BookingView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

impl From<Notification> for NotificationView {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            kind: n.kind,
            title: n.title,
            message: n.message,
            is_read: n.is_read,
            created_at: n.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub notifications: Vec<NotificationView>,
    pub unread_count: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i64,
    pub telegram_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub role: String,
    pub phone: String,
    pub bookings_count: i64,
    pub created_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let user = profile.user;
        Self {
            id: user.id,
            telegram_id: user.external_id,
            first_name: user.first_name,
            last_name: user.last_name.unwrap_or_default(),
            username: user.username.unwrap_or_default(),
            role: user.role,
            phone: user.phone.unwrap_or_default(),
            bookings_count: profile.bookings_count,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
