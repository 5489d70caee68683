use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::str::FromStr;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{DueCardsQuery, DueCardsResponse};
use crate::errors::ApiError;
use crate::repo;
use crate::AppState;

/// Handler for listing the cards due for a user by a given instant.
///
/// This function handles GET requests to `/users/{user_id}/due-cards`.
#[instrument(skip(state), fields(user_id = %user_id, until = %query.until))]
pub async fn list_due_cards_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<DueCardsQuery>,
) -> Result<Json<DueCardsResponse>, ApiError> {
    let user_uuid = Uuid::from_str(&user_id).map_err(|e| {
        warn!("rejected invalid user id: {}", e);
        ApiError::InvalidId(format!("user_id must be a UUID: {e}"))
    })?;

    let until = DateTime::parse_from_rfc3339(&query.until)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            warn!("rejected invalid until timestamp: {}", e);
            ApiError::InvalidTimestamp(format!("until must be an RFC 3339 timestamp: {e}"))
        })?;

    let mut conn = state.pool.get().map_err(|e| ApiError::Database(e.into()))?;
    let card_ids = repo::list_due_card_ids(&mut conn, &user_id, until).map_err(ApiError::Database)?;

    let card_uuids = card_ids
        .into_iter()
        .map(|id| Uuid::from_str(&id).map_err(|e| ApiError::Database(anyhow::anyhow!("stored card_id is not a UUID: {e}"))))
        .collect::<Result<Vec<_>, _>>()?;

    info!("found {} due cards", card_uuids.len());
    Ok(Json(DueCardsResponse::new(user_uuid, until, card_uuids)))
}
