use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use crate::state::AppState;
use crate::api::dtos::requests::{BookingAction, CreateBookingRequest, UpdateBookingRequest};
use crate::api::dtos::responses::{BookingCreatedResponse, BookingView, BookingsResponse, SlotsResponse, SuccessResponse};
use crate::api::extractors::{json::ApiJson, telegram_user::TelegramUser};
use crate::domain::models::booking::{NewBooking, DEFAULT_DURATION_MIN};
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::Malformed(format!("Invalid date '{}': {}", value, e)))
}

fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| AppError::Malformed(format!("Invalid time '{}': {}", value, e)))
}

/// `?action=slots` is public; every other GET lists the caller's bookings.
pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if params.get("action").map(String::as_str) == Some("slots") {
        let master_id = match params.get("master_id") {
            Some(raw) => raw.parse::<i64>()
                .map_err(|e| AppError::Malformed(format!("Invalid master_id '{}': {}", raw, e)))?,
            None => 0,
        };
        let date = parse_date(params.get("date").map(String::as_str).unwrap_or_default())?;

        let slots = state.slots.available_slots(master_id, date).await?;
        return Ok(Json(SlotsResponse { slots }).into_response());
    }

    let identity = TelegramUser::from_headers(&headers)?;
    let client = state.users.get_or_create_user(&identity).await?;
    let bookings = state.bookings.list_bookings(client.id).await?;

    Ok(Json(BookingsResponse {
        bookings: bookings.into_iter().map(BookingView::from).collect(),
    }).into_response())
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let identity = payload.telegram_user.unwrap_or_default().into_identity()?;

    let booking_date = parse_date(&payload.date)?;
    let start_time = parse_time(&payload.time)?;

    let client = state.users.get_or_create_user(&identity).await?;

    let created = state.bookings.create_booking(NewBooking {
        client_id: client.id,
        master_id: payload.master_id,
        service_id: payload.service_id,
        booking_date,
        start_time,
        duration_min: payload.duration.unwrap_or(DEFAULT_DURATION_MIN),
        notes: payload.notes.unwrap_or_default(),
    }).await?;

    Ok(Json(BookingCreatedResponse { success: true, booking_id: created.id }))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UpdateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    match payload.action {
        Some(BookingAction::Cancel) => {
            match payload.booking_id {
                Some(booking_id) => {
                    state.bookings.cancel_booking(booking_id).await?;
                    info!("Cancel handled for booking {}", booking_id);
                }
                None => warn!("Cancel requested without a booking id"),
            }
            Ok(Json(SuccessResponse::ok()))
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}
