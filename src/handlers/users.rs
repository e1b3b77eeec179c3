use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::issue_token;
use crate::error::ApiError;
use crate::models::User;
use crate::services::avatar;
use crate::store::AppState;

// Matches the work factor the service has always hashed with; existing
// stored hashes verify regardless.
const HASH_COST: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/users - register an account and respond with a bearer token.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<String>, ApiError> {
    let mut errors = Vec::new();
    if input.name.trim().is_empty() {
        errors.push("Please enter a Name");
    }
    if !super::is_email(&input.email) {
        errors.push("Valid email address is required");
    }
    if input.password.len() < 6 {
        errors.push("Please enter a password of minimum 6 length");
    }
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    if state.store.user_by_email(&input.email).await?.is_some() {
        return Err(ApiError::validation(vec!["User already exists"]));
    }

    let avatar = avatar::gravatar_url(&input.email);
    let hash = bcrypt::hash(&input.password, HASH_COST)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let user = User::new(input.name.trim().to_string(), input.email, hash, avatar);
    let token = issue_token(user.id).map_err(|e| ApiError::internal(e.to_string()))?;
    state.store.insert_user(user).await?;

    Ok(Json(token))
}
