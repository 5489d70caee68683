use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::scheduler::Rating;

/// Fixed +09:00 offset used to render the JST display fields. No DST.
fn jst_offset() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("9 hours is a valid fixed offset")
}

fn render_utc(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

fn render_jst(at: DateTime<Utc>) -> String {
    at.with_timezone(&jst_offset()).to_rfc3339()
}

/// Request body for `POST /reviews`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateReviewRequest {
    pub user_id: uuid::Uuid,
    pub card_id: uuid::Uuid,
    pub rating: i32,
    pub idempotency_key: String,
}

/// Response body for `POST /reviews`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ReviewResponse {
    pub next_review_utc: String,
    pub next_review_jst: String,
    pub interval_seconds: i64,
    pub rating_label: &'static str,
    pub idempotent: bool,
}

impl ReviewResponse {
    pub fn new(next_review_at: DateTime<Utc>, interval_seconds: i64, rating: Rating, idempotent: bool) -> Self {
        Self {
            next_review_utc: render_utc(next_review_at),
            next_review_jst: render_jst(next_review_at),
            interval_seconds,
            rating_label: rating.label(),
            idempotent,
        }
    }
}

/// Query parameters for `GET /users/{user_id}/due-cards`.
#[derive(Deserialize, Debug)]
pub struct DueCardsQuery {
    pub until: String,
}

/// Response body for `GET /users/{user_id}/due-cards`.
#[derive(Serialize, Deserialize, Debug)]
pub struct DueCardsResponse {
    pub user_id: uuid::Uuid,
    pub until_utc: String,
    pub until_jst: String,
    pub card_ids: Vec<uuid::Uuid>,
}

impl DueCardsResponse {
    pub fn new(user_id: uuid::Uuid, until: DateTime<Utc>, card_ids: Vec<uuid::Uuid>) -> Self {
        Self {
            user_id,
            until_utc: render_utc(until),
            until_jst: render_jst(until),
            card_ids,
        }
    }
}
