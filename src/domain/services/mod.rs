pub mod availability;
pub mod booking_ledger;
pub mod notification_service;
pub mod profile_service;
pub mod user_directory;
