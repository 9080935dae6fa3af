use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::TypedHeader;
use axum_extra::extract::CookieJar;
use common::config;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::auth::claims::{AuthUser, Claims};
use crate::response::ApiError;

/// Implements extraction of `AuthUser` from request parts.
///
/// Session identity is carried in the HTTP-only `token` cookie set at login;
/// a Bearer `Authorization` header is accepted as a fallback. The token is
/// verified against the configured secret, including its expiry.
///
/// # Errors
/// - `401 Unauthorized` if no token is present, or it is invalid or expired.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthorized("No token provided".into()))?;

        let token = match jar.get("token") {
            Some(cookie) => cookie.value().to_string(),
            None => {
                let TypedHeader(Authorization(bearer)) =
                    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                        .await
                        .map_err(|_| ApiError::Unauthorized("No token provided".into()))?;
                bearer.token().to_string()
            }
        };

        let token_data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".into()))?;

        Ok(AuthUser(token_data.claims))
    }
}
