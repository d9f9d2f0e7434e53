use sqlx::Arguments;
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;

use crate::dto::competition::CompetitionRequest;
use crate::models::{Competition, CompetitionSummary};
use crate::repository::resource::{BindArgs, CrudRepository, Resource};

/// CRUD descriptor for the competitions table.
pub struct Competitions;

pub type CompetitionRepository<'a> = CrudRepository<'a, Competitions>;

impl Resource for Competitions {
    type ListRow = CompetitionSummary;
    type Detail = Competition;
    type Payload = CompetitionRequest;

    const NAME: &'static str = "Competition";

    const LIST_SQL: &'static str = r#"
        SELECT c.id, c.name, ct.name AS type
        FROM competitions c
        JOIN competition_types ct ON c.type_id = ct.id
        ORDER BY c.name
    "#;

    const FIND_SQL: &'static str = r#"
        SELECT c.id, c.name, c.type_id, ct.name AS type
        FROM competitions c
        JOIN competition_types ct ON c.type_id = ct.id
        WHERE c.id = $1
    "#;

    const INSERT_SQL: &'static str = r#"
        INSERT INTO competitions (name, type_id)
        VALUES ($1, $2)
        RETURNING id
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE competitions
        SET name = $1, type_id = $2
        WHERE id = $3
    "#;

    const DELETE_SQL: &'static str = "DELETE FROM competitions WHERE id = $1";
}

impl BindArgs for CompetitionRequest {
    fn bind(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(&self.name)?;
        args.add(self.type_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_order_matches_statements() {
        let req = CompetitionRequest {
            name: "World Championship".to_string(),
            type_id: 1,
        };
        let mut args = PgArguments::default();
        req.bind(&mut args).unwrap();

        assert_eq!(args.len(), Competitions::INSERT_SQL.matches('$').count());
        assert_eq!(
            args.len() + 1,
            Competitions::UPDATE_SQL.matches('$').count()
        );
    }
}
