use anyhow::Result;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::models::ReviewLog;
use crate::scheduler::Rating;
use crate::schema::review_logs;

/// Looks up a previously recorded review by its idempotency triple.
pub fn find_by_idempotency(
    conn: &mut SqliteConnection,
    user_id: &str,
    card_id: &str,
    idempotency_key: &str,
) -> Result<Option<ReviewLog>> {
    let row = review_logs::table
        .filter(review_logs::user_id.eq(user_id))
        .filter(review_logs::card_id.eq(card_id))
        .filter(review_logs::idempotency_key.eq(idempotency_key))
        .first::<ReviewLog>(conn)
        .optional()?;
    Ok(row)
}

/// Appends a review log row.
///
/// Returns `(row, was_duplicate)`. On a unique-constraint violation against
/// `(user_id, card_id, idempotency_key)` — which should not occur under the
/// `BEGIN IMMEDIATE` discipline `record_review` uses, but is handled here
/// regardless since this function is a reusable store-layer primitive — the
/// existing winning row is fetched and returned with `was_duplicate = true`.
#[allow(clippy::too_many_arguments)]
pub fn append_review(
    conn: &mut SqliteConnection,
    user_id: &str,
    card_id: &str,
    rating: Rating,
    idempotency_key: &str,
    created_at: DateTime<Utc>,
    next_review_at: DateTime<Utc>,
    next_interval_seconds: i64,
) -> Result<(ReviewLog, bool)> {
    let new_log = ReviewLog::new(
        user_id.to_string(),
        card_id.to_string(),
        rating,
        idempotency_key.to_string(),
        created_at,
        next_review_at,
        next_interval_seconds,
    );

    let insert_result = diesel::insert_into(review_logs::table).values(&new_log).execute(conn);

    match insert_result {
        Ok(_) => Ok((new_log, false)),
        Err(diesel::result::Error::DatabaseError(diesel::result::DatabaseErrorKind::UniqueViolation, _)) => {
            let existing = find_by_idempotency(conn, user_id, card_id, idempotency_key)?
                .ok_or_else(|| anyhow::anyhow!("review log vanished after a unique-constraint conflict on insert"))?;
            Ok((existing, true))
        }
        Err(err) => Err(err.into()),
    }
}
