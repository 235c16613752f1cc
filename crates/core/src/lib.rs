//! Shared domain types for the duties service.
//!
//! Used by the database layer, the HTTP API, and the client so that every
//! boundary applies the same name rule.

pub mod config;
pub mod duty;
pub mod error;
pub mod types;
