/// Common test utilities for review scheduler integration tests
///
/// This file contains shared functions for setting up a test application
/// against an isolated in-memory SQLite database.
use chrono::{TimeZone, Utc};
use review_scheduler::{clock::FixedClock, create_app, db::init_pool, scheduler::SchedulingConfig, AppState};
use axum::Router;
use std::sync::Arc;

/// Creates a test application with a unique in-memory SQLite database and a
/// clock fixed at 2024-01-01T00:00:00Z.
///
/// Using an in-memory database ensures tests run quickly, are isolated from
/// each other, and need no cleanup.
pub fn create_test_app() -> Router {
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = init_pool(&database_url);

    let conn = &mut pool.get().unwrap();
    review_scheduler::run_migrations(conn);

    let state = Arc::new(AppState {
        pool: Arc::new(pool),
        clock: Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())),
        scheduling_config: SchedulingConfig::default(),
    });

    create_app(state)
}
