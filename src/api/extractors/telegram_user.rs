use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use crate::api::dtos::requests::ExternalProfile;
use crate::domain::models::user::ExternalIdentity;
use crate::error::AppError;
use tracing::Span;

pub const IDENTITY_HEADER: &str = "x-telegram-user";

/// Caller identity taken from the JSON-encoded `X-Telegram-User` header.
pub struct TelegramUser(pub ExternalIdentity);

impl TelegramUser {
    pub fn from_headers(headers: &HeaderMap) -> Result<ExternalIdentity, AppError> {
        let raw = match headers.get(IDENTITY_HEADER) {
            Some(value) => value.to_str()
                .map_err(|e| AppError::Malformed(format!("Invalid identity header: {}", e)))?,
            None => return Err(AppError::Unauthorized),
        };

        let profile: ExternalProfile = serde_json::from_str(raw)
            .map_err(|e| AppError::Malformed(format!("Invalid identity header: {}", e)))?;
        let identity = profile.into_identity()?;

        Span::current().record("external_id", identity.external_id);
        Ok(identity)
    }
}

impl<S> FromRequestParts<S> for TelegramUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers).map(TelegramUser)
    }
}
