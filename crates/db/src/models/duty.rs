//! Duty entity model.

use duties_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A duty as exposed over the API.
///
/// `created_at` exists in the `duties` table but is only used for ordering
/// and is never selected.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Duty {
    pub id: DbId,
    pub name: String,
}
