use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::db::{self, DbPool};
use crate::repo::{append_review, find_by_idempotency, get_or_create_schedule_for_update, save_schedule};
use crate::scheduler::{schedule_next, Rating, SchedulingConfig};

/// The outcome of recording a review: the instant the card is next due, the
/// interval that produced it (seconds), and whether this call reused a
/// previously recorded result rather than computing a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedReview {
    pub next_review_at: DateTime<Utc>,
    pub interval_seconds: i64,
    pub was_idempotent: bool,
}

/// Records a review outcome for `(user_id, card_id)` and returns the
/// resulting schedule.
///
/// Implements the full review-recording protocol: a fast, lock-free
/// idempotency check; a `BEGIN IMMEDIATE` transaction that re-checks
/// idempotency once the write lock is held, fetches-or-creates the schedule
/// row, computes the next interval via the pure `schedule_next` rule, and
/// persists both the updated schedule and the new review log row. Two
/// concurrent calls with the same `(user_id, card_id, idempotency_key)`
/// always yield identical results and at most one `ReviewLog` row.
pub fn record_review(
    pool: &DbPool,
    clock: &dyn Clock,
    cfg: &SchedulingConfig,
    user_id: &str,
    card_id: &str,
    rating: Rating,
    idempotency_key: &str,
) -> Result<RecordedReview> {
    let mut conn = pool.get()?;

    // Step 1: fast idempotent read, no lock held.
    if let Some(existing) = find_by_idempotency(&mut conn, user_id, card_id, idempotency_key)? {
        return Ok(RecordedReview {
            next_review_at: existing.next_review_at(),
            interval_seconds: existing.next_interval_seconds(),
            was_idempotent: true,
        });
    }

    db::with_immediate_transaction(&mut conn, |conn| {
        // Step 3: re-check inside the write lock, closing the race between
        // two first-ever requests sharing a key.
        if let Some(existing) = find_by_idempotency(conn, user_id, card_id, idempotency_key)? {
            return Ok(RecordedReview {
                next_review_at: existing.next_review_at(),
                interval_seconds: existing.next_interval_seconds(),
                was_idempotent: true,
            });
        }

        // Step 2: fetch-or-create the schedule row under the write lock.
        let now = clock.now();
        let mut sched = get_or_create_schedule_for_update(conn, user_id, card_id, now)?;

        // Step 4: compute.
        let is_first = sched.is_first_review();
        let next_interval = schedule_next(cfg, rating, sched.last_interval_seconds(), is_first);
        let next_review_at = now + chrono::Duration::seconds(next_interval);

        // Step 5: mutate and persist the schedule.
        let next_streak = if rating == Rating::Again { 0 } else { sched.streak() + 1 };
        sched.apply_review(next_interval, next_review_at, next_streak);
        save_schedule(conn, &sched)?;

        // Step 6: append the log, falling back to idempotent reuse on a
        // unique-constraint conflict this caller didn't expect to hit.
        let (log, was_duplicate) =
            append_review(conn, user_id, card_id, rating, idempotency_key, now, next_review_at, next_interval)?;

        Ok(RecordedReview {
            next_review_at: log.next_review_at(),
            interval_seconds: log.next_interval_seconds(),
            was_idempotent: was_duplicate,
        })
    })
}
