use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A card's per-user schedule: when it's next due, and the state needed to
/// compute the interval after its next review.
///
/// One row per `(user_id, card_id)` pair, created lazily on the first review
/// for that pair and mutated in place thereafter — never deleted by the
/// core.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::card_schedules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CardSchedule {
    user_id: String,
    card_id: String,

    /// Consecutive non-zero ratings; reset to 0 by a rating of `Again`.
    streak: i32,

    /// The interval, in seconds, applied at the most recent review. `0`
    /// means this pair has never been reviewed.
    last_interval_seconds: i64,

    next_review_at: NaiveDateTime,
}

impl CardSchedule {
    /// Creates a freshly-initialized schedule row for a (user, card) pair
    /// that has never been reviewed: zero streak, zero interval, due
    /// immediately (`next_review_at = now`).
    pub fn new(user_id: String, card_id: String, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            card_id,
            streak: 0,
            last_interval_seconds: 0,
            next_review_at: now.naive_utc(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn streak(&self) -> i32 {
        self.streak
    }

    pub fn last_interval_seconds(&self) -> i64 {
        self.last_interval_seconds
    }

    pub fn next_review_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.next_review_at, Utc)
    }

    /// Whether this pair has never been reviewed.
    pub fn is_first_review(&self) -> bool {
        self.last_interval_seconds == 0
    }

    /// Applies the outcome of a review: the freshly computed interval, the
    /// instant it was computed from, and the new streak.
    pub fn apply_review(&mut self, next_interval_seconds: i64, next_review_at: DateTime<Utc>, next_streak: i32) {
        self.last_interval_seconds = next_interval_seconds;
        self.next_review_at = next_review_at.naive_utc();
        self.streak = next_streak;
    }
}
