//! Shared response envelope for API handlers.
//!
//! Every response carries a `success` flag: `{ "success": true, "data": ... }`
//! on the happy path, `{ "success": false, "error": { "code", "message" } }`
//! for failures (built by [`crate::error::AppError`]). Use [`ApiResponse`]
//! instead of ad-hoc `serde_json::json!` so payloads stay typed.

use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in the success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
