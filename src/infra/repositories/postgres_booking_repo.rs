use crate::domain::{
    models::{booking::{Booking, BookingStatus, BookingSummary, NewBooking}, notification::NotificationDraft},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use chrono::{NaiveDate, NaiveTime, Utc};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create_with_notification(&self, booking: &NewBooking, end_time: NaiveTime, notification: &NotificationDraft) -> Result<Booking, AppError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (client_id, master_id, service_id, booking_date, start_time, end_time, status, notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *"
        )
            .bind(booking.client_id)
            .bind(booking.master_id)
            .bind(booking.service_id)
            .bind(booking.booking_date)
            .bind(booking.start_time)
            .bind(end_time)
            .bind(BookingStatus::Pending.as_str())
            .bind(&booking.notes)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::from)?;

        sqlx::query(
            "INSERT INTO notifications (user_id, booking_id, type, title, message, is_read, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)"
        )
            .bind(notification.user_id)
            .bind(created.id)
            .bind(&notification.kind)
            .bind(&notification.title)
            .bind(&notification.message)
            .bind(false)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;

        tx.commit().await.map_err(AppError::from)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn list_active_for_master(&self, master_id: i64, date: NaiveDate) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE master_id = $1 AND booking_date = $2 AND status <> $3 ORDER BY start_time ASC"
        )
            .bind(master_id)
            .bind(date)
            .bind(BookingStatus::Cancelled.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn list_for_client(&self, client_id: i64, limit: i64) -> Result<Vec<BookingSummary>, AppError> {
        sqlx::query_as::<_, BookingSummary>(
            "SELECT b.id, b.booking_date, b.start_time, b.end_time, b.status, b.notes,
                    m.first_name AS master_name, s.name AS service_name, s.price AS price
             FROM bookings b
             JOIN users m ON b.master_id = m.id
             JOIN services s ON b.service_id = s.id
             WHERE b.client_id = $1
             ORDER BY b.booking_date DESC, b.start_time DESC, b.id DESC
             LIMIT $2"
        )
            .bind(client_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn count_for_client(&self, client_id: i64) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE client_id = $1")
            .bind(client_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(result.get::<i64, _>("count"))
    }

    async fn cancel(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE bookings SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(BookingStatus::Cancelled.as_str())
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(result.rows_affected())
    }
}
