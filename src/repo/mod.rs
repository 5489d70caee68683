/// Repository module
///
/// This module provides the data access layer for the application.
/// It contains functions for interacting with the database: locating and
/// creating card schedules, appending review log rows, and orchestrating
/// the two into a single review-recording operation.
///
/// The repository pattern abstracts away the details of database access
/// and provides a clean API for the rest of the application to use.
mod review_log_repo;
mod review_service;
mod schedule_repo;

// Re-export all repository functions
pub use review_log_repo::*;
pub use review_service::*;
pub use schedule_repo::*;
