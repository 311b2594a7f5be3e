use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{MarkReadRequest, NotificationAction, NotificationActionRequest};
use crate::api::dtos::responses::{NotificationView, NotificationsResponse, SuccessResponse};
use crate::api::extractors::{json::ApiJson, telegram_user::TelegramUser};
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    TelegramUser(identity): TelegramUser,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.find_user(identity.external_id).await?;
    let (notifications, unread_count) = state.notifications.list_notifications(user.id).await?;

    Ok(Json(NotificationsResponse {
        notifications: notifications.into_iter().map(NotificationView::from).collect(),
        unread_count,
    }))
}

pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    TelegramUser(identity): TelegramUser,
    ApiJson(payload): ApiJson<MarkReadRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.find_user(identity.external_id).await?;
    match payload.notification_id {
        Some(notification_id) => state.notifications.mark_read(notification_id, user.id).await?,
        None => debug!("Mark-read without a notification id for user {}", user.id),
    }
    Ok(Json(SuccessResponse::ok()))
}

pub async fn notification_action(
    State(state): State<Arc<AppState>>,
    TelegramUser(identity): TelegramUser,
    ApiJson(payload): ApiJson<NotificationActionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.find_user(identity.external_id).await?;

    match payload.action {
        Some(NotificationAction::MarkAllRead) => {
            state.notifications.mark_all_read(user.id).await?;
            Ok(Json(SuccessResponse::ok()))
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}
