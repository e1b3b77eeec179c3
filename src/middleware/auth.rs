use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth;
use crate::error::ApiError;

/// Custom header existing clients send the bearer token in.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Authenticated user context extracted from the bearer token, valid for the
/// lifetime of one request.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Authentication gate applied to every protected route.
///
/// Missing and invalid credentials both stop the request here with a 401;
/// the downstream handler only ever runs with a verified identity attached.
/// Malformed and expired tokens produce the same response on the wire.
pub async fn token_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = match headers.get(AUTH_HEADER).and_then(|v| v.to_str().ok()) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => return Err(ApiError::unauthorized("No Token,authorization denied")),
    };

    let user_id = auth::verify_token(&token)
        .map_err(|_| ApiError::unauthorized("Token not valid,authorization denied"))?;

    request.extensions_mut().insert(AuthUser { id: user_id });

    Ok(next.run(request).await)
}
