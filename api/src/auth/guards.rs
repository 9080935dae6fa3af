use crate::auth::claims::AuthUser;
use crate::response::ApiError;
use axum::{
    body::Body,
    extract::FromRequestParts,
    http::Request,
    middleware::Next,
    response::Response,
};

/// Helper to extract and validate the user from the request, inserting the
/// claims back into the request extensions for downstream handlers.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), ApiError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &()).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Admin-only guard. Authorization is decided by the verified token's role
/// claim alone.
pub async fn allow_admin(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if !user.0.is_admin() {
        return Err(ApiError::Forbidden("Only admins can create events".into()));
    }

    Ok(next.run(req).await)
}
