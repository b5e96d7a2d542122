//! Authentication primitives and the session lifecycle.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- access-token generation/validation and refresh-token helpers.
//! - [`session`] -- token issuance, rotation, and logout against the
//!   per-member refresh credential store.

pub mod jwt;
pub mod password;
pub mod session;
