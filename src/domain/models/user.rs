use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROLE_CLIENT: &str = "client";
pub const ROLE_MASTER: &str = "master";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: i64,
    pub external_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub role: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Identity as supplied by the messaging platform, already checked for a
/// usable external id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIdentity {
    pub external_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl ExternalIdentity {
    pub fn new(
        external_id: i64,
        first_name: Option<String>,
        last_name: Option<String>,
        username: Option<String>,
    ) -> Self {
        Self {
            external_id,
            first_name: first_name.unwrap_or_else(|| "User".to_string()),
            last_name: last_name.unwrap_or_default(),
            username: username.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub user: User,
    pub bookings_count: i64,
}
