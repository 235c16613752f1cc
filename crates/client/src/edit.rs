//! Inline rename of a single list row.
//!
//! At most one row is in edit mode, identified by its duty id. Starting an
//! edit on another row silently replaces the current one. A failed save
//! leaves the row in edit mode so the user can retry or cancel.

use duties_core::duty::{validate_name, DutyName};
use duties_core::types::DbId;

use crate::input::InputError;
use crate::types::Duty;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing {
        id: DbId,
        draft: String,
        saving: bool,
        error: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditState {
    mode: EditMode,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn editing_id(&self) -> Option<DbId> {
        match self.mode {
            EditMode::Editing { id, .. } => Some(id),
            EditMode::Viewing => None,
        }
    }

    pub fn is_editing(&self, id: DbId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Editing { draft, .. } => Some(draft.as_str()),
            EditMode::Viewing => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.mode, EditMode::Editing { saving: true, .. })
    }

    /// Message from the last failed save, or the last validation failure.
    pub fn error(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Editing { error, .. } => error.as_deref(),
            EditMode::Viewing => None,
        }
    }

    /// Put `duty` in edit mode, seeding the draft with its current name.
    /// Any other row in edit mode is dropped without confirmation.
    pub fn begin(&mut self, duty: &Duty) {
        self.mode = EditMode::Editing {
            id: duty.id,
            draft: duty.name.clone(),
            saving: false,
            error: None,
        };
    }

    pub fn set_draft(&mut self, value: impl Into<String>) {
        if let EditMode::Editing { draft, error, .. } = &mut self.mode {
            *draft = value.into();
            *error = None;
        }
    }

    /// Leave edit mode. The row shows its stored name again.
    pub fn cancel(&mut self) {
        self.mode = EditMode::Viewing;
    }

    /// Validate the draft and mark the row as saving.
    pub fn begin_save(&mut self) -> Result<(DbId, DutyName), InputError> {
        let EditMode::Editing {
            id,
            draft,
            saving,
            error,
        } = &mut self.mode
        else {
            return Err(InputError::NotEditing);
        };
        if *saving {
            return Err(InputError::Busy);
        }
        let name = validate_name(draft).map_err(|e| {
            *error = Some(e.client_message().to_string());
            InputError::from(e)
        })?;
        *error = None;
        *saving = true;
        Ok((*id, name))
    }

    /// The update for `id` succeeded. Leaves edit mode unless the user has
    /// meanwhile moved on to another row.
    pub fn save_succeeded(&mut self, id: DbId) {
        if self.is_editing(id) {
            self.mode = EditMode::Viewing;
        }
    }

    /// The update for `id` failed. The row stays in edit mode with `message`.
    pub fn save_failed(&mut self, id: DbId, message: impl Into<String>) {
        if let EditMode::Editing {
            id: current,
            saving,
            error,
            ..
        } = &mut self.mode
        {
            if *current == id {
                *saving = false;
                *error = Some(message.into());
            }
        }
    }
}
