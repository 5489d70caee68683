use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scheduler::Rating;

/// An immutable record of a single review outcome.
///
/// Append-only: no row is ever updated after insert. `(user_id, card_id,
/// idempotency_key)` is unique, which is what makes retried requests safe to
/// resubmit.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::review_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReviewLog {
    id: String,
    user_id: String,
    card_id: String,
    rating: i32,
    idempotency_key: String,
    created_at: NaiveDateTime,
    next_review_at: NaiveDateTime,
    next_interval_seconds: i64,
}

impl ReviewLog {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: String,
        card_id: String,
        rating: Rating,
        idempotency_key: String,
        created_at: DateTime<Utc>,
        next_review_at: DateTime<Utc>,
        next_interval_seconds: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            card_id,
            rating: rating.as_i32(),
            idempotency_key,
            created_at: created_at.naive_utc(),
            next_review_at: next_review_at.naive_utc(),
            next_interval_seconds,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn idempotency_key(&self) -> &str {
        &self.idempotency_key
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }

    pub fn next_review_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.next_review_at, Utc)
    }

    pub fn next_interval_seconds(&self) -> i64 {
        self.next_interval_seconds
    }
}
