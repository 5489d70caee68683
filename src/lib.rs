/// Review Scheduler: a spaced-repetition review scheduling service
///
/// This library provides the core functionality for a spaced repetition
/// review scheduler: a pure scheduling rule, a relational store of per-card
/// schedules and review history, and a web API for recording reviews and
/// listing the cards due for a user.
///
/// # Modules
///
/// - `scheduler`: the pure `schedule_next` rule and its injectable config
/// - `clock`: an injectable source of "now", real or fixed for tests
/// - `db`: database connection pooling and the `BEGIN IMMEDIATE` write lock
/// - `models`: `CardSchedule` and `ReviewLog` row types
/// - `repo`: the data access and review-recording layer
/// - `schema`: Diesel's generated table definitions
/// - `errors`: the HTTP-facing error type
/// - `dto`: request/response bodies for the web API
/// - `handlers`: the Axum route handlers
/// - `config`: layered configuration (defaults, config file, env, CLI flags)
///
/// # Web API
///
/// - `POST /reviews`: record a review outcome for a `(user_id, card_id)` pair
/// - `GET /users/{user_id}/due-cards`: list the cards due for a user by a
///   given instant
pub mod clock;
pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod schema;
pub mod scheduler;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use clock::Clock;
use db::DbPool;
use scheduler::SchedulingConfig;

/// Shared application state handed to every handler.
pub struct AppState {
    pub pool: Arc<DbPool>,
    pub clock: Arc<dyn Clock>,
    pub scheduling_config: SchedulingConfig,
}

/// Creates the application router with all routes wired to `state`.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/reviews", post(handlers::create_review_handler))
        .route("/users/{user_id}/due-cards", get(handlers::list_due_cards_handler))
        .with_state(state)
}

/// Runs the embedded migrations against `conn`.
pub fn run_migrations(conn: &mut diesel::SqliteConnection) {
    use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    conn.run_pending_migrations(MIGRATIONS).expect("Failed to run migrations");
}
