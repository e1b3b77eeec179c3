use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::auth::issue_token;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::models::User;
use crate::store::AppState;

/// GET /api/auth - the account behind the bearer identity, hash stripped
/// by the model's serialization.
pub async fn current_user(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .store
        .user_by_id(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/auth - credential check against the stored hash; a token on
/// match. Unknown email and wrong password answer identically.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<String>, ApiError> {
    let mut errors = Vec::new();
    if !super::is_email(&input.email) {
        errors.push("Valid email address is required");
    }
    if input.password.is_empty() {
        errors.push("Password is required");
    }
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let user = state
        .store
        .user_by_email(&input.email)
        .await?
        .ok_or_else(|| ApiError::validation(vec!["Invalid credentials"]))?;

    let matches = bcrypt::verify(&input.password, &user.password)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    if !matches {
        return Err(ApiError::validation(vec!["Invalid credentials"]));
    }

    let token = issue_token(user.id).map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(token))
}
