//! Domain-level building blocks shared by the db and api crates.
//!
//! - [`error`] -- typed error taxonomy ([`error::CoreError`], [`error::AuthError`]).
//! - [`types`] -- shared primitive type aliases.
//! - [`ownership`] -- authorship checks applied before mutating content.
//! - [`validation`] -- field-level checks for signup and content input.

pub mod error;
pub mod ownership;
pub mod types;
pub mod validation;
