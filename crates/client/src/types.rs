//! Wire types exchanged with the duties API.

use duties_core::duty::DutyName;
use duties_core::types::DbId;
use serde::{Deserialize, Serialize};

/// A duty as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    pub id: DbId,
    pub name: String,
}

/// Body of `POST /duties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDutyRequest {
    pub name: String,
}

/// Body of `PUT /duties/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateDutyRequest {
    pub name: String,
}

impl From<&DutyName> for CreateDutyRequest {
    fn from(name: &DutyName) -> Self {
        Self {
            name: name.as_str().to_string(),
        }
    }
}

impl From<&DutyName> for UpdateDutyRequest {
    fn from(name: &DutyName) -> Self {
        Self {
            name: name.as_str().to_string(),
        }
    }
}
