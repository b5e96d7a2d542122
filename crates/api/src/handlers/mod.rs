//! HTTP handlers, grouped by resource.

pub mod comment;
pub mod like;
pub mod member;
pub mod post;
pub mod reply;
