use std::sync::Arc;
use crate::domain::{models::user::{ExternalIdentity, User}, ports::UserRepository};
use crate::error::AppError;
use tracing::{info, Span};

/// Maps messaging-platform identities to internal users.
pub struct UserDirectory {
    repo: Arc<dyn UserRepository>,
}

impl UserDirectory {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Repeat contact returns the stored row untouched; names given on first
    /// contact stay until the profile is edited.
    pub async fn get_or_create_user(&self, identity: &ExternalIdentity) -> Result<User, AppError> {
        let (user, created) = self.repo.resolve_or_create(identity).await?;
        if created {
            info!("Created user {} for external id {}", user.id, identity.external_id);
        }
        Span::current().record("user_id", user.id);
        Ok(user)
    }

    pub async fn find_user(&self, external_id: i64) -> Result<User, AppError> {
        let user = self.repo.find_by_external_id(external_id).await?
            .ok_or(AppError::NotFound("User not found".into()))?;
        Span::current().record("user_id", user.id);
        Ok(user)
    }
}
