use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::dto::{CreateReviewRequest, ReviewResponse};
use crate::errors::ApiError;
use crate::repo;
use crate::scheduler::Rating;
use crate::AppState;

const MAX_IDEMPOTENCY_KEY_LEN: usize = 64;

/// Handler for recording a review.
///
/// This function handles POST requests to `/reviews`.
#[instrument(skip(state, payload), fields(user_id = %payload.user_id, card_id = %payload.card_id, rating = %payload.rating))]
pub async fn create_review_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiError> {
    let rating = Rating::try_from(payload.rating).map_err(|e| {
        warn!("rejected invalid rating: {}", e);
        ApiError::InvalidRating(e.to_string())
    })?;

    if payload.idempotency_key.is_empty() || payload.idempotency_key.chars().count() > MAX_IDEMPOTENCY_KEY_LEN {
        return Err(ApiError::InvalidIdempotencyKey(format!(
            "idempotency_key must be 1..={MAX_IDEMPOTENCY_KEY_LEN} chars, got {}",
            payload.idempotency_key.chars().count()
        )));
    }

    let user_id = payload.user_id.to_string();
    let card_id = payload.card_id.to_string();

    let recorded = repo::record_review(
        &state.pool,
        state.clock.as_ref(),
        &state.scheduling_config,
        &user_id,
        &card_id,
        rating,
        &payload.idempotency_key,
    )
    .map_err(ApiError::Database)?;

    let status = if recorded.was_idempotent { StatusCode::OK } else { StatusCode::CREATED };
    info!(
        "recorded review: interval_seconds={} idempotent={}",
        recorded.interval_seconds, recorded.was_idempotent
    );

    let response = ReviewResponse::new(recorded.next_review_at, recorded.interval_seconds, rating, recorded.was_idempotent);
    Ok((status, Json(response)))
}
