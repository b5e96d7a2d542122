//! Authorship checks for mutating content.

use crate::error::CoreError;
use crate::types::DbId;

/// Ensure the caller authored the entity they are trying to change.
///
/// There is no role system and no admin override: authorship equality is the
/// entire check, applied uniformly before update/delete on posts, comments,
/// and replies.
pub fn ensure_owner(author_id: DbId, caller_id: DbId) -> Result<(), CoreError> {
    if author_id != caller_id {
        return Err(CoreError::Forbidden(
            "Only the author can modify this".into(),
        ));
    }
    Ok(())
}
