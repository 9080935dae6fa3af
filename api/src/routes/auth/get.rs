use axum::{Json, extract::State};
use db::models::user;
use sea_orm::DatabaseConnection;

use crate::auth::claims::AuthUser;
use crate::response::ApiError;
use crate::routes::common::UserResponse;

/// GET /profile
///
/// Returns the authenticated user's record, excluding the password hash.
///
/// ### Responses
/// - `200 OK` — user object
/// - `401 Unauthorized` — missing, invalid, or expired token
/// - `404 Not Found` — the user encoded in the token no longer exists
pub async fn profile(
    State(db): State<DatabaseConnection>,
    AuthUser(claims): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = user::Model::get_by_id(&db, claims.sub)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch profile", e))?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    Ok(Json(UserResponse::from(&user)))
}
