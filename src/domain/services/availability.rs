use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use crate::domain::models::booking::Booking;
use crate::domain::models::schedule::MasterSchedule;
use crate::domain::ports::{BookingRepository, ScheduleRepository};
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

pub const SLOT_MINUTES: u32 = 30;

const SLOT_SECS: u32 = SLOT_MINUTES * 60;

/// Free slot start times ("HH:MM", ascending) inside the schedule window.
///
/// A candidate is emitted while its start lies before the schedule's end, so
/// the last slot may run past closing time. A candidate is taken when it
/// falls inside `[start_time, end_time)` of any booking that is not cancelled.
pub fn calculate_slots(schedule: Option<&MasterSchedule>, existing_bookings: &[Booking]) -> Vec<String> {
    let Some(schedule) = schedule else {
        return Vec::new();
    };

    let win_start = schedule.start_time.num_seconds_from_midnight();
    let win_end = schedule.end_time.num_seconds_from_midnight();

    let taken: Vec<(u32, u32)> = existing_bookings
        .iter()
        .filter(|b| !b.is_cancelled())
        .map(|b| (b.start_time.num_seconds_from_midnight(), b.end_time.num_seconds_from_midnight()))
        .collect();

    let mut valid_slots = Vec::new();
    let mut cursor = win_start;
    while cursor < win_end {
        let is_taken = taken.iter().any(|&(start, end)| start <= cursor && cursor < end);

        if !is_taken
            && let Some(slot) = NaiveTime::from_num_seconds_from_midnight_opt(cursor, 0) {
            valid_slots.push(slot.format("%H:%M").to_string());
        }
        cursor += SLOT_SECS;
    }

    valid_slots
}

pub struct SlotAvailability {
    schedule_repo: Arc<dyn ScheduleRepository>,
    booking_repo: Arc<dyn BookingRepository>,
}

impl SlotAvailability {
    pub fn new(schedule_repo: Arc<dyn ScheduleRepository>, booking_repo: Arc<dyn BookingRepository>) -> Self {
        Self { schedule_repo, booking_repo }
    }

    /// An unknown master and a master without hours that day both yield no slots.
    pub async fn available_slots(&self, master_id: i64, date: NaiveDate) -> Result<Vec<String>, AppError> {
        let day_of_week = date.weekday().number_from_monday() as i32;

        let Some(schedule) = self.schedule_repo.find_active(master_id, day_of_week).await? else {
            debug!("No active schedule for master {} on weekday {}", master_id, day_of_week);
            return Ok(Vec::new());
        };

        let bookings = self.booking_repo.list_active_for_master(master_id, date).await?;
        Ok(calculate_slots(Some(&schedule), &bookings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn schedule(start: &str, end: &str) -> MasterSchedule {
        MasterSchedule {
            id: 1,
            master_id: 7,
            day_of_week: 1,
            start_time: time(start),
            end_time: time(end),
            is_active: true,
        }
    }

    fn booking(start: &str, end: &str, status: &str) -> Booking {
        Booking {
            id: 1,
            client_id: 2,
            master_id: 7,
            service_id: 3,
            booking_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            start_time: time(start),
            end_time: time(end),
            status: status.to_string(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_free_day_tiles_window() {
        let slots = calculate_slots(Some(&schedule("09:00", "12:00")), &[]);
        assert_eq!(slots, vec!["09:00", "09:30", "10:00", "10:30", "11:00", "11:30"]);
    }

    #[test]
    fn test_booking_removes_covered_slots() {
        let bookings = vec![booking("10:00", "11:00", "pending")];
        let slots = calculate_slots(Some(&schedule("09:00", "12:00")), &bookings);
        assert_eq!(slots, vec!["09:00", "09:30", "11:00", "11:30"]);
    }

    #[test]
    fn test_cancelled_booking_is_ignored() {
        let bookings = vec![booking("10:00", "11:00", "cancelled")];
        let slots = calculate_slots(Some(&schedule("09:00", "12:00")), &bookings);
        assert_eq!(slots.len(), 6);
    }

    #[test]
    fn test_no_schedule_means_no_slots() {
        assert!(calculate_slots(None, &[]).is_empty());
    }

    #[test]
    fn test_trailing_slot_may_cross_closing_time() {
        // 09:00-10:15 yields a 10:00 slot that ends at 10:30.
        let slots = calculate_slots(Some(&schedule("09:00", "10:15")), &[]);
        assert_eq!(slots, vec!["09:00", "09:30", "10:00"]);
    }

    #[test]
    fn test_booking_starting_mid_slot_keeps_that_slot() {
        // Only candidates inside [start, end) are blocked; 10:00 < 10:15.
        let bookings = vec![booking("10:15", "10:45", "confirmed")];
        let slots = calculate_slots(Some(&schedule("10:00", "11:00")), &bookings);
        assert_eq!(slots, vec!["10:00"]);
    }

    #[test]
    fn test_inverted_window_is_empty() {
        assert!(calculate_slots(Some(&schedule("18:00", "09:00")), &[]).is_empty());
    }
}
