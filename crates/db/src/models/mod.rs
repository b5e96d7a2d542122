//! Row structs and create/update DTOs for every table.

pub mod comment;
pub mod member;
pub mod post;
pub mod refresh_token;
pub mod reply;
