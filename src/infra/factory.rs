use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::{BookingRepository, NotificationRepository, ScheduleRepository, UserRepository};
use crate::domain::services::{
    availability::SlotAvailability, booking_ledger::BookingLedger,
    notification_service::NotificationStore, profile_service::ProfileStore,
    user_directory::UserDirectory,
};
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_notification_repo::PostgresNotificationRepo,
    postgres_schedule_repo::PostgresScheduleRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_notification_repo::SqliteNotificationRepo,
    sqlite_schedule_repo::SqliteScheduleRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if config.is_postgres() {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        postgres_state(pool)
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        sqlite_state(pool)
    }
}

pub fn postgres_state(pool: PgPool) -> AppState {
    assemble_state(
        Arc::new(PostgresUserRepo::new(pool.clone())),
        Arc::new(PostgresScheduleRepo::new(pool.clone())),
        Arc::new(PostgresBookingRepo::new(pool.clone())),
        Arc::new(PostgresNotificationRepo::new(pool)),
    )
}

pub fn sqlite_state(pool: SqlitePool) -> AppState {
    assemble_state(
        Arc::new(SqliteUserRepo::new(pool.clone())),
        Arc::new(SqliteScheduleRepo::new(pool.clone())),
        Arc::new(SqliteBookingRepo::new(pool.clone())),
        Arc::new(SqliteNotificationRepo::new(pool)),
    )
}

fn assemble_state(
    user_repo: Arc<dyn UserRepository>,
    schedule_repo: Arc<dyn ScheduleRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
) -> AppState {
    let users = Arc::new(UserDirectory::new(user_repo.clone()));
    let bookings = Arc::new(BookingLedger::new(booking_repo.clone()));

    AppState {
        slots: Arc::new(SlotAvailability::new(schedule_repo, booking_repo)),
        notifications: Arc::new(NotificationStore::new(notification_repo)),
        profiles: Arc::new(ProfileStore::new(users.clone(), user_repo, bookings.clone())),
        users,
        bookings,
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
