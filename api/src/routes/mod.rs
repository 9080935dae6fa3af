//! HTTP route entry point.
//!
//! Route groups:
//! - `/register`, `/login`, `/profile`, `/logout` → authentication (public,
//!   except `/profile` which requires a token cookie)
//! - `/createEvent` → event creation (admin-only, guarded)
//! - `/events`, `/event/{id}` → event retrieval (public)
//! - `/health` → health check (public)

use crate::routes::{auth::auth_routes, events::event_routes, health::health_routes};
use axum::Router;
use sea_orm::DatabaseConnection;

pub mod auth;
pub mod common;
pub mod events;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// Route paths are flat (no `/api` prefix); the route table matches the
/// public interface exactly.
pub fn routes(db: DatabaseConnection) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(event_routes())
        .nest("/health", health_routes())
        .with_state(db)
}
