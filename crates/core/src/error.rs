use crate::types::DbId;

/// Failure kinds produced while resolving the caller's identity.
///
/// Every request-time credential problem maps onto one of these values; none
/// of them is ever allowed to escape as a panic. The api crate translates
/// them into the wire error codes (`MEMBER_NOT_FOUND`, `INVALID_TOKEN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` or `Refresh-Token` header was absent.
    #[error("Login required")]
    MissingCredential,

    /// The access token failed signature or structural validation.
    #[error("Token is invalid")]
    InvalidToken,

    /// The access token was well-formed but past its expiry.
    #[error("Token has expired")]
    Expired,

    /// The credential referenced a member that does not exist (or a refresh
    /// token with no stored counterpart, e.g. after logout).
    #[error("Member not found")]
    MemberNotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Internal error: {0}")]
    Internal(String),
}
