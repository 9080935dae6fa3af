//! # auth Routes Module
//!
//! Registration, login, profile retrieval, and logout.
//!
//! ## Structure
//! - `post.rs` — POST handlers (register, login, logout)
//! - `get.rs` — GET handlers (profile)

pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;

use get::profile;
use post::{login, logout, register};

/// Builds the authentication route group.
///
/// - `POST /register` → `register`
/// - `POST /login` → `login`
/// - `GET /profile` → `profile`
/// - `POST /logout` → `logout`
pub fn auth_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(profile))
        .route("/logout", post(logout))
}
