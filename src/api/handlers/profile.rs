use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::UpdateProfileRequest;
use crate::api::dtos::responses::{ProfileResponse, SuccessResponse};
use crate::api::extractors::{json::ApiJson, telegram_user::TelegramUser};
use crate::domain::models::user::ProfileUpdate;
use crate::error::AppError;
use std::sync::Arc;

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    TelegramUser(identity): TelegramUser,
) -> Result<impl IntoResponse, AppError> {
    let profile = state.profiles.get_profile(&identity).await?;
    Ok(Json(ProfileResponse::from(profile)))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    TelegramUser(identity): TelegramUser,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.profiles.update_profile(identity.external_id, ProfileUpdate {
        first_name: payload.first_name,
        last_name: payload.last_name.unwrap_or_default(),
        phone: payload.phone.unwrap_or_default(),
    }).await?;
    Ok(Json(SuccessResponse::ok()))
}
