//! UI controller: turns user events into API calls and state updates.
//!
//! Every action follows the same pattern: validate locally, call the API,
//! and only on success apply the matching [`ListAction`]. A failure leaves
//! the list untouched, logs the cause, and queues an error notification.
//! Nothing is retried automatically.

use duties_core::types::DbId;

use crate::edit::EditState;
use crate::input::{DutyInputForm, InputError};
use crate::list::{DutyList, ListAction};
use crate::notify::{self, Notifications};
use crate::service::{DutyApi, ServiceError};
use crate::types::{CreateDutyRequest, Duty, UpdateDutyRequest};

/// Why a controller action did not complete.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Rejected locally; no request was sent.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The request was sent and failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub struct DutyApp<A> {
    api: A,
    list: DutyList,
    input: DutyInputForm,
    edit: EditState,
    notifications: Notifications,
}

impl<A: DutyApi> DutyApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            list: DutyList::new(),
            input: DutyInputForm::new(),
            edit: EditState::new(),
            notifications: Notifications::new(),
        }
    }

    pub fn list(&self) -> &DutyList {
        &self.list
    }

    pub fn input(&self) -> &DutyInputForm {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut DutyInputForm {
        &mut self.input
    }

    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Fetch the full list from the server.
    pub async fn load(&mut self) -> Result<(), ActionError> {
        self.list.apply(ListAction::LoadStarted);
        match self.api.fetch_duties().await {
            Ok(duties) => {
                self.list.apply(ListAction::Loaded(duties));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load duties");
                self.list.apply(ListAction::LoadFailed);
                self.notifications.error(notify::LOAD_FAILED);
                Err(e.into())
            }
        }
    }

    /// Submit the new-duty form.
    pub async fn submit_new(&mut self) -> Result<Duty, ActionError> {
        let name = self.input.begin_submit()?;

        let result = self.api.create_duty(&CreateDutyRequest::from(&name)).await;
        self.input.finish_submit(result.is_ok());

        match result {
            Ok(duty) => {
                self.list.apply(ListAction::Created(duty.clone()));
                self.notifications.success(notify::CREATE_SUCCEEDED);
                Ok(duty)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to add duty");
                self.notifications.error(notify::CREATE_FAILED);
                Err(e.into())
            }
        }
    }

    /// Enter edit mode for the row with `id`, replacing any other edit.
    /// Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: DbId) {
        if let Some(duty) = self.list.get(id) {
            self.edit.begin(duty);
        }
    }

    pub fn set_edit_draft(&mut self, value: impl Into<String>) {
        self.edit.set_draft(value);
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    /// Save the row currently in edit mode.
    pub async fn save_edit(&mut self) -> Result<Duty, ActionError> {
        let (id, name) = self.edit.begin_save()?;

        match self
            .api
            .update_duty(id, &UpdateDutyRequest::from(&name))
            .await
        {
            Ok(duty) => {
                self.list.apply(ListAction::Updated(duty.clone()));
                self.edit.save_succeeded(id);
                self.notifications.success(notify::UPDATE_SUCCEEDED);
                Ok(duty)
            }
            Err(e) => {
                tracing::warn!(duty_id = id, error = %e, "Failed to update duty");
                self.edit.save_failed(id, notify::UPDATE_FAILED);
                self.notifications.error(notify::UPDATE_FAILED);
                Err(e.into())
            }
        }
    }

    /// Delete the duty with `id`.
    pub async fn delete(&mut self, id: DbId) -> Result<(), ActionError> {
        match self.api.delete_duty(id).await {
            Ok(()) => {
                self.list.apply(ListAction::Deleted(id));
                if self.edit.is_editing(id) {
                    self.edit.cancel();
                }
                self.notifications.success(notify::DELETE_SUCCEEDED);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(duty_id = id, error = %e, "Failed to delete duty");
                self.notifications.error(notify::DELETE_FAILED);
                Err(e.into())
            }
        }
    }
}
