//! Repository for the `duties` table.

use duties_core::duty::DutyName;
use duties_core::types::DbId;
use sqlx::PgPool;

use crate::models::duty::Duty;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for duties.
///
/// Every method issues exactly one statement. Names arrive already
/// validated, so only trimmed values reach the table.
pub struct DutyRepo;

impl DutyRepo {
    /// List all duties, newest first. Rows created in the same instant fall
    /// back to descending id so the order never changes between calls.
    pub async fn list(pool: &PgPool) -> Result<Vec<Duty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM duties ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Duty>(&query).fetch_all(pool).await
    }

    /// Find a duty by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Duty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM duties WHERE id = $1");
        sqlx::query_as::<_, Duty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new duty, returning the created row.
    pub async fn create(pool: &PgPool, name: &DutyName) -> Result<Duty, sqlx::Error> {
        let query = format!("INSERT INTO duties (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Duty>(&query)
            .bind(name.as_str())
            .fetch_one(pool)
            .await
    }

    /// Rename a duty.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &DutyName,
    ) -> Result<Option<Duty>, sqlx::Error> {
        let query = format!("UPDATE duties SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Duty>(&query)
            .bind(id)
            .bind(name.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a duty by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM duties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
