//! Request handlers.
//!
//! Handlers delegate to the repositories in `duties_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod duty;
