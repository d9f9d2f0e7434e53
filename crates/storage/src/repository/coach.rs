use sqlx::Arguments;
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;

use crate::dto::coach::CoachRequest;
use crate::models::Coach;
use crate::repository::resource::{BindArgs, CrudRepository, Resource};

/// CRUD descriptor for the coaches table. Coaches have no references of
/// their own, so the list and detail rows are the same shape.
pub struct Coaches;

pub type CoachRepository<'a> = CrudRepository<'a, Coaches>;

impl Resource for Coaches {
    type ListRow = Coach;
    type Detail = Coach;
    type Payload = CoachRequest;

    const NAME: &'static str = "Coach";

    const LIST_SQL: &'static str = "SELECT id, full_name FROM coaches ORDER BY full_name";

    const FIND_SQL: &'static str = "SELECT id, full_name FROM coaches WHERE id = $1";

    const INSERT_SQL: &'static str = r#"
        INSERT INTO coaches (full_name)
        VALUES ($1)
        RETURNING id
    "#;

    const UPDATE_SQL: &'static str = "UPDATE coaches SET full_name = $1 WHERE id = $2";

    const DELETE_SQL: &'static str = "DELETE FROM coaches WHERE id = $1";
}

impl BindArgs for CoachRequest {
    fn bind(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(&self.full_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_order_matches_statements() {
        let req = CoachRequest {
            full_name: "J. Smith".to_string(),
        };
        let mut args = PgArguments::default();
        req.bind(&mut args).unwrap();

        assert_eq!(args.len(), Coaches::INSERT_SQL.matches('$').count());
        assert_eq!(args.len() + 1, Coaches::UPDATE_SQL.matches('$').count());
    }
}
