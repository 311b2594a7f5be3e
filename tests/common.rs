use appointment_backend::{
    api::router::create_router,
    domain::models::user::ROLE_MASTER,
    infra::factory::{run_sqlite_migrations, sqlite_state},
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{NaiveTime, Utc};
use serde_json::{json, Value};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Row, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// A Monday.
pub const MONDAY: &str = "2026-10-19";
/// The Tuesday after [`MONDAY`].
pub const TUESDAY: &str = "2026-10-20";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool).await;

        let state = Arc::new(sqlite_state(pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn seed_master(&self, external_id: i64, first_name: &str) -> i64 {
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO users (external_id, first_name, last_name, username, role, created_at, updated_at)
             VALUES (?, ?, '', '', ?, ?, ?) RETURNING id"
        )
            .bind(external_id)
            .bind(first_name)
            .bind(ROLE_MASTER)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .unwrap()
            .get::<i64, _>("id")
    }

    pub async fn seed_service(&self, name: &str, price: f64) -> i64 {
        sqlx::query("INSERT INTO services (name, price) VALUES (?, ?) RETURNING id")
            .bind(name)
            .bind(price)
            .fetch_one(&self.pool)
            .await
            .unwrap()
            .get::<i64, _>("id")
    }

    pub async fn seed_schedule(&self, master_id: i64, day_of_week: i32, start: &str, end: &str, is_active: bool) {
        sqlx::query("INSERT INTO master_schedule (master_id, day_of_week, start_time, end_time, is_active) VALUES (?, ?, ?, ?, ?)")
            .bind(master_id)
            .bind(day_of_week)
            .bind(NaiveTime::parse_from_str(start, "%H:%M").unwrap())
            .bind(NaiveTime::parse_from_str(end, "%H:%M").unwrap())
            .bind(is_active)
            .execute(&self.pool)
            .await
            .unwrap();
    }

    /// Master "Anna" working Mondays 09:00-12:00 plus one service.
    /// Returns `(master_id, service_id)`.
    pub async fn seed_monday_master(&self) -> (i64, i64) {
        let master_id = self.seed_master(9000, "Anna").await;
        self.seed_schedule(master_id, 1, "09:00", "12:00", true).await;
        let service_id = self.seed_service("Manicure", 1500.0).await;
        (master_id, service_id)
    }

    pub async fn count(&self, sql: &str) -> i64 {
        sqlx::query(sql)
            .fetch_one(&self.pool)
            .await
            .unwrap()
            .get::<i64, _>(0)
    }

    /// Sends a request through the router. `identity` fills the
    /// `X-Telegram-User` header.
    pub async fn send(&self, method: &str, uri: &str, identity: Option<Value>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(identity) = identity {
            builder = builder.header("X-Telegram-User", identity.to_string());
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, value)
    }

    pub async fn book(&self, external_id: i64, master_id: i64, service_id: i64, date: &str, time: &str) -> (StatusCode, Value) {
        self.send("POST", "/api/v1/bookings", None, Some(json!({
            "telegramUser": telegram_user(external_id),
            "masterId": master_id,
            "serviceId": service_id,
            "date": date,
            "time": time,
            "duration": 60,
            "notes": "first visit"
        }))).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

#[allow(dead_code)]
pub fn telegram_user(external_id: i64) -> Value {
    json!({
        "id": external_id,
        "first_name": "Maria",
        "last_name": "Volkova",
        "username": "maria_v"
    })
}
