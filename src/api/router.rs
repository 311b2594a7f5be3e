use axum::{
    body::Body,
    extract::Request,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::cors::permissive_cors;
use crate::api::handlers::{booking, health, method_not_allowed, notification, options_ok, profile};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        .route(
            "/api/v1/bookings",
            get(booking::get_bookings)
                .post(booking::create_booking)
                .put(booking::update_booking)
                .options(options_ok)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/v1/notifications",
            get(notification::list_notifications)
                .put(notification::mark_read)
                .post(notification::notification_action)
                .options(options_ok)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/v1/profile",
            get(profile::get_profile)
                .put(profile::update_profile)
                .options(options_ok)
                .fallback(method_not_allowed),
        )

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        external_id = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(permissive_cors())
        .with_state(state)
}
