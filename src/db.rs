/// Database connection module
///
/// This module provides functionality for creating and managing database connections
/// using Diesel's r2d2 connection pooling. It abstracts away the details of
/// connection management to provide a simple interface for the rest of the application.
use anyhow::Result;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

/// Type alias for a connection pool of SQLite connections
///
/// This type is used throughout the application to represent a pool of database
/// connections. Using a connection pool allows for efficient reuse of connections
/// and helps manage database resources.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Initializes a new database connection pool
///
/// ### Arguments
///
/// * `database_url` - A string slice containing the database connection URL
///
/// ### Returns
///
/// A new connection pool configured with the provided database URL
///
/// ### Panics
///
/// This function will panic if the connection pool cannot be created
pub fn init_pool(database_url: &str) -> DbPool {
    // Create a new connection manager for SQLite
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    // Build a connection pool with default configuration
    // This will panic if the pool cannot be created
    Pool::builder().build(manager).expect("Failed to create pool.")
}

/// Runs `f` inside a SQLite `BEGIN IMMEDIATE` transaction.
///
/// SQLite has no per-row locking, so `BEGIN IMMEDIATE` is used to acquire the
/// database-wide write lock up front, as a stand-in for the row-level
/// `SELECT ... FOR UPDATE` a multi-row-lockable store would provide. All
/// writers serialize on this lock, which linearizes writes per `(user_id,
/// card_id)` pair (and, as a side effect, across all pairs).
///
/// On `Ok`, the transaction is committed and the value returned. On `Err`,
/// the transaction is rolled back and the error propagated.
pub fn with_immediate_transaction<T>(
    conn: &mut SqliteConnection,
    f: impl FnOnce(&mut SqliteConnection) -> Result<T>,
) -> Result<T> {
    conn.batch_execute("BEGIN IMMEDIATE")?;
    match f(conn) {
        Ok(value) => {
            conn.batch_execute("COMMIT")?;
            Ok(value)
        }
        Err(err) => {
            let _ = conn.batch_execute("ROLLBACK");
            Err(err)
        }
    }
}
