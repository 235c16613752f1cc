//! In-memory list of duties shown to the user.
//!
//! The list only changes through [`DutyList::apply`], and the controller
//! only applies an action after the server has confirmed it. Items keep the
//! server's newest-first order; the list never re-sorts.

use duties_core::types::DbId;

use crate::types::Duty;

pub const LOADING_MESSAGE: &str = "Loading duties...";
pub const EMPTY_MESSAGE: &str = "No duties yet. Add your first duty above.";

/// State transitions for [`DutyList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// A fetch of the full list has started.
    LoadStarted,
    /// The server returned the full list.
    Loaded(Vec<Duty>),
    /// The fetch failed; existing items are kept.
    LoadFailed,
    /// A duty was created; it goes to the top.
    Created(Duty),
    /// A duty was renamed; it keeps its position.
    Updated(Duty),
    /// A duty was deleted.
    Deleted(DbId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyList {
    items: Vec<Duty>,
    loading: bool,
}

impl Default for DutyList {
    /// A fresh list is loading: the initial fetch starts as soon as the UI
    /// mounts.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl DutyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::LoadStarted => self.loading = true,
            ListAction::Loaded(items) => {
                self.items = items;
                self.loading = false;
            }
            ListAction::LoadFailed => self.loading = false,
            ListAction::Created(duty) => {
                self.items.retain(|d| d.id != duty.id);
                self.items.insert(0, duty);
            }
            ListAction::Updated(duty) => {
                if let Some(slot) = self.items.iter_mut().find(|d| d.id == duty.id) {
                    *slot = duty;
                }
            }
            ListAction::Deleted(id) => self.items.retain(|d| d.id != id),
        }
    }

    pub fn items(&self) -> &[Duty] {
        &self.items
    }

    pub fn get(&self, id: DbId) -> Option<&Duty> {
        self.items.iter().find(|d| d.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Placeholder text for an empty list, `None` when there is something to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.has_items() {
            None
        } else if self.loading {
            Some(LOADING_MESSAGE)
        } else {
            Some(EMPTY_MESSAGE)
        }
    }
}
