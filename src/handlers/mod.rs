use uuid::Uuid;

use crate::error::ApiError;

pub mod auth;
pub mod posts;
pub mod profile;
pub mod users;

/// Loose email shape check, enough to catch the obviously malformed.
pub(crate) fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Path ids arrive as raw strings; an unparseable id reads the same as an
/// unknown one, so lookups cannot leak whether an id was ever valid.
pub(crate) fn parse_id(raw: &str, missing: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(missing))
}
