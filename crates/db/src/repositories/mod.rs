//! Repositories: one unit struct per table with static async functions over
//! a `&PgPool`.

mod comment_repo;
mod member_repo;
mod post_repo;
mod reaction_repo;
mod refresh_token_repo;
mod reply_repo;

pub use comment_repo::CommentRepo;
pub use member_repo::MemberRepo;
pub use post_repo::PostRepo;
pub use reaction_repo::{ReactionRepo, TargetKind, ToggleOutcome, ToggleResult};
pub use refresh_token_repo::RefreshTokenRepo;
pub use reply_repo::ReplyRepo;
