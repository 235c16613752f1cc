//! Client-side view-model for the duties UI.
//!
//! Holds everything a renderer needs: the HTTP service, the list of duties,
//! the new-duty form, the inline edit state, and transient notifications.
//! [`app::DutyApp`] ties them together and is the entry point for UI events.
//! Nothing here draws pixels.

pub mod app;
pub mod edit;
pub mod input;
pub mod list;
pub mod notify;
pub mod service;
pub mod types;

pub use app::DutyApp;
pub use service::{DutyApi, DutyService, ServiceError};
pub use types::Duty;
