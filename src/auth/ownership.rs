use uuid::Uuid;

use crate::error::ApiError;

/// Outcome of comparing a resource's recorded owner with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied,
}

/// Pure ownership check. Callers must confirm the resource exists (404)
/// before consulting this, so a denial is never reported as "not found".
pub fn authorize(owner: Uuid, principal: Uuid) -> Decision {
    if owner == principal {
        Decision::Allowed
    } else {
        Decision::Denied
    }
}

/// Handler-side helper mapping a denial to the API's rejection response.
pub fn ensure_owner(owner: Uuid, principal: Uuid) -> Result<(), ApiError> {
    match authorize(owner, principal) {
        Decision::Allowed => Ok(()),
        Decision::Denied => Err(ApiError::forbidden("User not Authorised")),
    }
}
