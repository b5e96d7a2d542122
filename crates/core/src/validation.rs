//! Field-level validation for signup and content input.
//!
//! Constants and helpers used by the API layer before anything touches the
//! database. Uniqueness (nickname) is enforced separately by the db layer.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Minimum length for a member nickname.
pub const MIN_NICKNAME_LENGTH: usize = 3;

/// Maximum length for a member nickname.
pub const MAX_NICKNAME_LENGTH: usize = 20;

/// Minimum length for a member password.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Maximum length for a post title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for post, comment, and reply bodies.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate a nickname: trimmed length within bounds, no whitespace.
pub fn validate_nickname(nickname: &str) -> Result<(), CoreError> {
    let len = nickname.chars().count();
    if len < MIN_NICKNAME_LENGTH || len > MAX_NICKNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Nickname must be between {MIN_NICKNAME_LENGTH} and {MAX_NICKNAME_LENGTH} characters"
        )));
    }
    if nickname.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Nickname must not contain whitespace".into(),
        ));
    }
    Ok(())
}

/// Validate a password meets the minimum length.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a post title: non-blank and within length bounds.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a text body (post, comment, or reply content).
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content must not be empty".into()));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Content must be at most {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}
