use std::sync::Arc;
use crate::domain::{
    models::user::{ExternalIdentity, Profile, ProfileUpdate},
    ports::UserRepository,
    services::{booking_ledger::BookingLedger, user_directory::UserDirectory},
};
use crate::error::AppError;
use tracing::info;

pub struct ProfileStore {
    users: Arc<UserDirectory>,
    user_repo: Arc<dyn UserRepository>,
    bookings: Arc<BookingLedger>,
}

impl ProfileStore {
    pub fn new(users: Arc<UserDirectory>, user_repo: Arc<dyn UserRepository>, bookings: Arc<BookingLedger>) -> Self {
        Self { users, user_repo, bookings }
    }

    pub async fn get_profile(&self, identity: &ExternalIdentity) -> Result<Profile, AppError> {
        let user = self.users.get_or_create_user(identity).await?;
        let bookings_count = self.bookings.count_bookings(user.id).await?;
        Ok(Profile { user, bookings_count })
    }

    /// Overwrites all three fields; the caller supplies empty strings for
    /// anything the request left out.
    pub async fn update_profile(&self, external_id: i64, update: ProfileUpdate) -> Result<(), AppError> {
        let user = self.users.find_user(external_id).await?;
        self.user_repo.update_profile(user.id, &update).await?;
        info!("Profile updated for user {}", user.id);
        Ok(())
    }
}
