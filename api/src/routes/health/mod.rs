pub mod get;

use axum::{Router, routing::get};
use get::health;
use sea_orm::DatabaseConnection;

pub fn health_routes() -> Router<DatabaseConnection> {
    Router::new().route("/", get(health))
}
