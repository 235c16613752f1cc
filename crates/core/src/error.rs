use crate::duty::NameError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<NameError> for CoreError {
    fn from(err: NameError) -> Self {
        CoreError::Validation(err.server_message().to_string())
    }
}
