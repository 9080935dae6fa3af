use axum::{
    Json,
    extract::{Path, State},
};
use db::models::event;
use sea_orm::DatabaseConnection;

use crate::response::ApiError;

/// GET /events
///
/// Returns every event, unordered. No pagination: the full result set is
/// always materialized.
pub async fn list_events(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<event::Model>>, ApiError> {
    let events = event::Model::list_all(&db)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch events", e))?;

    Ok(Json(events))
}

/// GET /event/{id}
///
/// Returns a single event by id.
///
/// ### Responses
/// - `200 OK` — the event
/// - `404 Not Found` — no event with that id
pub async fn get_event(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i64>,
) -> Result<Json<event::Model>, ApiError> {
    let event = event::Model::get_by_id(&db, id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch event", e))?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;

    Ok(Json(event))
}
