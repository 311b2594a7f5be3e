use std::sync::Arc;
use crate::domain::{
    models::{booking::{Booking, BookingSummary, NewBooking}, notification::NotificationDraft},
    ports::BookingRepository,
};
use crate::error::AppError;
use tracing::{info, warn};

pub const CLIENT_HISTORY_LIMIT: i64 = 50;

pub struct BookingLedger {
    repo: Arc<dyn BookingRepository>,
}

impl BookingLedger {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// Inserts a pending booking and its `booking_created` notification for
    /// the client in one transaction.
    ///
    /// The requested slot is not re-checked against the master's calendar.
    /// Only a second live booking with the same master, date and start time
    /// is refused by the store.
    pub async fn create_booking(&self, booking: NewBooking) -> Result<Booking, AppError> {
        let end_time = booking.end_time()
            .ok_or_else(|| AppError::Malformed(format!("Invalid duration: {} minutes", booking.duration_min)))?;
        let notification = NotificationDraft::booking_created(booking.client_id, booking.booking_date, booking.start_time);

        let created = self.repo.create_with_notification(&booking, end_time, &notification).await?;
        info!(
            "Booking {} created: client {} with master {} on {} at {}",
            created.id, created.client_id, created.master_id, created.booking_date, created.start_time
        );
        Ok(created)
    }

    pub async fn get_booking(&self, booking_id: i64) -> Result<Option<Booking>, AppError> {
        self.repo.find_by_id(booking_id).await
    }

    pub async fn list_bookings(&self, client_id: i64) -> Result<Vec<BookingSummary>, AppError> {
        self.repo.list_for_client(client_id, CLIENT_HISTORY_LIMIT).await
    }

    pub async fn count_bookings(&self, client_id: i64) -> Result<i64, AppError> {
        self.repo.count_for_client(client_id).await
    }

    // TODO: restrict to the booking's client or master once callers are authenticated on PUT.
    pub async fn cancel_booking(&self, booking_id: i64) -> Result<(), AppError> {
        let affected = self.repo.cancel(booking_id).await?;
        if affected == 0 {
            warn!("Cancel requested for unknown booking {}", booking_id);
        } else {
            info!("Booking {} cancelled", booking_id);
        }
        Ok(())
    }
}
