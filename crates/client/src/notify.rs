//! Transient user-facing notifications ("toasts").

use std::collections::VecDeque;

pub const LOAD_FAILED: &str = "Failed to load duties.";
pub const CREATE_FAILED: &str = "Failed to add duty.";
pub const UPDATE_FAILED: &str = "Failed to update duty.";
pub const DELETE_FAILED: &str = "Failed to delete duty.";

pub const CREATE_SUCCEEDED: &str = "Duty added successfully.";
pub const UPDATE_SUCCEEDED: &str = "Duty updated successfully.";
pub const DELETE_SUCCEEDED: &str = "Duty deleted successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

/// Pending notifications, oldest first. The renderer drains them.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Level::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Level::Error, message.into());
    }

    fn push(&mut self, level: Level, message: String) {
        self.queue.push_back(Notification { level, message });
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.queue.back()
    }

    /// Take every pending notification.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }
}
