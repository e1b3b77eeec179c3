use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;

pub mod ownership;

/// Claims carried by a bearer token. The `user` envelope mirrors the wire
/// format existing clients already decode.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenUser {
    pub id: Uuid,
}

impl Claims {
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        let ttl = config::config().security.token_ttl_secs;

        Self {
            user: TokenUser { id: user_id },
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl)).timestamp(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Token could not be parsed or its signature does not match.
    #[error("token is malformed or its signature does not match")]
    Malformed,
    /// Signature is valid but the token is past its expiry.
    #[error("token has expired")]
    Expired,
    #[error("token signing secret is not configured")]
    MissingSecret,
    #[error("token could not be signed: {0}")]
    Signing(String),
}

/// Sign a token binding `user_id` for the configured lifetime.
pub fn issue_token(user_id: Uuid) -> Result<String, TokenError> {
    let secret = &config::config().security.token_secret;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, &Claims::new(user_id), &encoding_key)
        .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Validate signature and expiry, returning the bound user id.
///
/// `Malformed` and `Expired` stay distinct here; the HTTP boundary collapses
/// them into a single response so callers cannot tell which one occurred.
pub fn verify_token(token: &str) -> Result<Uuid, TokenError> {
    let secret = &config::config().security.token_secret;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    })?;

    Ok(token_data.claims.user.id)
}
