pub mod json;
pub mod telegram_user;
