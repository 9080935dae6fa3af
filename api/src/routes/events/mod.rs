//! # events Routes Module
//!
//! Event creation (admin-only) and retrieval.
//!
//! ## Structure
//! - `post.rs` — POST handlers (createEvent)
//! - `get.rs` — GET handlers (events list, single event)

pub mod get;
pub mod post;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;

use crate::auth::guards::allow_admin;
use get::{get_event, list_events};
use post::create_event;

/// Builds the event route group.
///
/// - `POST /createEvent` → `create_event` (admin-only)
/// - `GET /events` → `list_events`
/// - `GET /event/{id}` → `get_event`
pub fn event_routes() -> Router<DatabaseConnection> {
    // route_layer only applies to routes registered before it, which scopes
    // the admin guard to /createEvent.
    Router::new()
        .route("/createEvent", post(create_event))
        .route_layer(from_fn(allow_admin))
        .route("/events", get(list_events))
        .route("/event/{id}", get(get_event))
}
