use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use common::format_validation_errors;
use db::models::user::{self, Role};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiError;
use crate::routes::common::UserResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Optional role; defaults to `user`.
    pub role: Option<Role>,
}

/// POST /register
///
/// Register a new user.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` — `{ "message": "Registration successful", "user": { ... } }`
///   (the user object never includes the password hash)
/// - `400 Bad Request` — validation failure, or
///   `{ "error": "Duplicate entry", "details": "This email is already registered. Please log in instead." }`
/// - `500 Internal Server Error`
pub async fn register(
    State(db): State<DatabaseConnection>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(validation_errors) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(
            &validation_errors,
        )));
    }

    let role = req.role.unwrap_or_default();

    // The unique index on email is the final arbiter under concurrent
    // registration; the losing insert surfaces as a duplicate here.
    let created = user::Model::create(&db, &req.name, &req.email, &req.password, role).await;
    let created_user = match created {
        Ok(u) => u,
        Err(e) if user::is_duplicate_email(&e) => return Err(ApiError::DuplicateEmail),
        Err(e) => return Err(ApiError::internal("Registration failed", e)),
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Registration successful",
            "user": UserResponse::from(&created_user),
        })),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login
///
/// Authenticate an existing user, issue a JWT, and set it as an HTTP-only
/// cookie.
///
/// ### Responses
/// - `200 OK` — `{ "user": { ... }, "token": "..." }` plus a `token` cookie
/// - `401 Unauthorized` — wrong password
/// - `404 Not Found` — no user with that email
/// - `500 Internal Server Error`
pub async fn login(
    State(db): State<DatabaseConnection>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = user::Model::get_by_email(&db, &req.email)
        .await
        .map_err(|e| ApiError::internal("Login failed", e))?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    if !user.verify_password(&req.password) {
        return Err(ApiError::Unauthorized("Invalid password".into()));
    }

    let (token, _expires_at) = generate_jwt(user.id, &user.email, user.role);

    let cookie = Cookie::build(("token", token.clone()))
        .http_only(true)
        .path("/")
        .build();

    Ok((
        jar.add(cookie),
        Json(json!({
            "user": UserResponse::from(&user),
            "token": token,
        })),
    ))
}

/// POST /logout
///
/// Clears the `token` cookie. Idempotent: always returns `200 OK`, whether or
/// not a session existed.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let removal = Cookie::build(("token", "")).path("/").build();

    (
        jar.remove(removal),
        Json(json!({ "message": "Logged out successfully" })),
    )
}
