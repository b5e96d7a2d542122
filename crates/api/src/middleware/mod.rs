//! Request middleware: the authenticated-member extractor.

pub mod auth;
