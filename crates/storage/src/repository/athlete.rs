use sqlx::Arguments;
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;

use crate::dto::athlete::AthleteRequest;
use crate::models::{Athlete, AthleteSummary};
use crate::repository::resource::{BindArgs, CrudRepository, Resource};

/// CRUD descriptor for the athletes table.
pub struct Athletes;

pub type AthleteRepository<'a> = CrudRepository<'a, Athletes>;

impl Resource for Athletes {
    type ListRow = AthleteSummary;
    type Detail = Athlete;
    type Payload = AthleteRequest;

    const NAME: &'static str = "Athlete";

    const LIST_SQL: &'static str = r#"
        SELECT a.id, a.name, a.type, st.name AS sport_type, c.full_name AS coach_name
        FROM athletes a
        JOIN sport_types st ON a.sport_type_id = st.id
        JOIN coaches c ON a.coach_id = c.id
        ORDER BY a.name
    "#;

    const FIND_SQL: &'static str = r#"
        SELECT a.id, a.name, a.type, a.sport_type_id, a.coach_id,
               st.name AS sport_type, c.full_name AS coach_name
        FROM athletes a
        JOIN sport_types st ON a.sport_type_id = st.id
        JOIN coaches c ON a.coach_id = c.id
        WHERE a.id = $1
    "#;

    const INSERT_SQL: &'static str = r#"
        INSERT INTO athletes (name, type, sport_type_id, coach_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE athletes
        SET name = $1, type = $2, sport_type_id = $3, coach_id = $4
        WHERE id = $5
    "#;

    const DELETE_SQL: &'static str = "DELETE FROM athletes WHERE id = $1";
}

impl BindArgs for AthleteRequest {
    fn bind(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(&self.name)?;
        args.add(&self.athlete_type)?;
        args.add(self.sport_type_id)?;
        args.add(self.coach_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_order_matches_statements() {
        let req = AthleteRequest {
            name: "A. Lee".to_string(),
            athlete_type: "Individual".to_string(),
            sport_type_id: 1,
            coach_id: 1,
        };
        let mut args = PgArguments::default();
        req.bind(&mut args).unwrap();

        assert_eq!(args.len(), Athletes::INSERT_SQL.matches('$').count());
        // UPDATE appends the id as its final placeholder.
        assert_eq!(args.len() + 1, Athletes::UPDATE_SQL.matches('$').count());
    }
}
