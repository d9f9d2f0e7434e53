use std::marker::PhantomData;

use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{Arguments, FromRow, PgPool};

use crate::error::{Result, StorageError};

/// Appends a payload's column values to a set of query arguments, in the
/// order the owning entity's INSERT and UPDATE statements expect them.
pub trait BindArgs {
    fn bind(&self, args: &mut PgArguments) -> std::result::Result<(), BoxDynError>;
}

/// Descriptor for one CRUD-managed entity: its row types, its validated
/// payload, and the five parameterized statements that operate on it.
/// The four entity slices differ only in this descriptor; everything else
/// is shared through [`CrudRepository`].
pub trait Resource {
    /// Row returned by `list()`, with reference display names joined in.
    type ListRow: for<'r> FromRow<'r, PgRow> + Send + Unpin;
    /// Row returned by `find_by_id()`, carrying raw foreign keys.
    type Detail: for<'r> FromRow<'r, PgRow> + Send + Unpin;
    /// Validated payload accepted by `create()` and `update()`.
    type Payload: BindArgs + Send + Sync;

    /// Display name used in not-found and conflict messages.
    const NAME: &'static str;

    const LIST_SQL: &'static str;
    /// Single-row select, `$1` = id.
    const FIND_SQL: &'static str;
    /// Insert returning the new id; placeholders follow payload bind order.
    const INSERT_SQL: &'static str;
    /// Full replace; payload placeholders first, id last.
    const UPDATE_SQL: &'static str;
    /// Single-row delete, `$1` = id.
    const DELETE_SQL: &'static str;
}

/// Generic repository covering the uniform CRUD contract for any
/// [`Resource`]. Every user-supplied value goes through parameter binding.
pub struct CrudRepository<'a, E: Resource> {
    pool: &'a PgPool,
    entity: PhantomData<E>,
}

impl<'a, E: Resource> CrudRepository<'a, E> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            entity: PhantomData,
        }
    }

    /// List all rows in the entity's natural display order.
    pub async fn list(&self) -> Result<Vec<E::ListRow>> {
        let rows = sqlx::query_as::<_, E::ListRow>(E::LIST_SQL)
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// Fetch a single row by id.
    pub async fn find_by_id(&self, id: i32) -> Result<E::Detail> {
        sqlx::query_as::<_, E::Detail>(E::FIND_SQL)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound { entity: E::NAME })
    }

    /// Insert a new row and return its assigned identity.
    pub async fn create(&self, payload: &E::Payload) -> Result<i32> {
        let mut args = PgArguments::default();
        payload
            .bind(&mut args)
            .map_err(|e| StorageError::Encode(e.to_string()))?;

        let id = sqlx::query_scalar_with::<_, i32, _>(E::INSERT_SQL, args)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                write_error(
                    e,
                    format!("{} references a record that does not exist", E::NAME),
                )
            })?;

        Ok(id)
    }

    /// Replace all mutable fields of the row matching `id`. A missing id is
    /// a no-op, not an error.
    pub async fn update(&self, id: i32, payload: &E::Payload) -> Result<()> {
        let mut args = PgArguments::default();
        payload
            .bind(&mut args)
            .map_err(|e| StorageError::Encode(e.to_string()))?;
        args.add(id)
            .map_err(|e| StorageError::Encode(e.to_string()))?;

        sqlx::query_with(E::UPDATE_SQL, args)
            .execute(self.pool)
            .await
            .map_err(|e| {
                write_error(
                    e,
                    format!("{} references a record that does not exist", E::NAME),
                )
            })?;

        Ok(())
    }

    /// Delete the row matching `id`. A missing id is a no-op; a row still
    /// referenced elsewhere surfaces as a constraint violation.
    pub async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query(E::DELETE_SQL)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                write_error(
                    e,
                    format!("{} is still referenced by another record", E::NAME),
                )
            })?;

        Ok(())
    }
}

/// Fold referential-integrity failures (FK 23503, unique 23505) into the
/// conflict kind; everything else stays a plain database error.
fn write_error(e: sqlx::Error, conflict: String) -> StorageError {
    if let sqlx::Error::Database(ref db_err) = e {
        if matches!(db_err.code().as_deref(), Some("23503") | Some("23505")) {
            return StorageError::ConstraintViolation(conflict);
        }
    }
    StorageError::from(e)
}
