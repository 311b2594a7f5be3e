use std::sync::Arc;
use crate::domain::services::{
    availability::SlotAvailability, booking_ledger::BookingLedger,
    notification_service::NotificationStore, profile_service::ProfileStore,
    user_directory::UserDirectory,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserDirectory>,
    pub slots: Arc<SlotAvailability>,
    pub bookings: Arc<BookingLedger>,
    pub notifications: Arc<NotificationStore>,
    pub profiles: Arc<ProfileStore>,
}
