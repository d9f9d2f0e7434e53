use sqlx::Arguments;
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;

use crate::dto::result::ResultRequest;
use crate::models::{CompetitionResult, ResultSummary};
use crate::repository::resource::{BindArgs, CrudRepository, Resource};

/// CRUD descriptor for the results table. Duplicate results for the same
/// competition/sport/athlete/award tuple are allowed; only the primary key
/// is unique.
pub struct Results;

pub type ResultRepository<'a> = CrudRepository<'a, Results>;

impl Resource for Results {
    type ListRow = ResultSummary;
    type Detail = CompetitionResult;
    type Payload = ResultRequest;

    const NAME: &'static str = "Result";

    const LIST_SQL: &'static str = r#"
        SELECT r.id, r.competition_id, r.sport_type_id, r.athlete_id, r.award_id,
               r.event_date,
               c.name AS competition_name,
               st.name AS sport_type,
               a.name AS athlete_name,
               aw.name AS award_name
        FROM results r
        JOIN competitions c ON r.competition_id = c.id
        JOIN sport_types st ON r.sport_type_id = st.id
        JOIN athletes a ON r.athlete_id = a.id
        JOIN awards aw ON r.award_id = aw.id
        ORDER BY r.event_date DESC
    "#;

    const FIND_SQL: &'static str = r#"
        SELECT r.id, r.competition_id, r.sport_type_id, r.athlete_id, r.award_id,
               r.event_date
        FROM results r
        WHERE r.id = $1
    "#;

    const INSERT_SQL: &'static str = r#"
        INSERT INTO results (competition_id, sport_type_id, athlete_id, award_id, event_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
    "#;

    const UPDATE_SQL: &'static str = r#"
        UPDATE results
        SET competition_id = $1, sport_type_id = $2, athlete_id = $3,
            award_id = $4, event_date = $5
        WHERE id = $6
    "#;

    const DELETE_SQL: &'static str = "DELETE FROM results WHERE id = $1";
}

impl BindArgs for ResultRequest {
    fn bind(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(self.competition_id)?;
        args.add(self.sport_type_id)?;
        args.add(self.athlete_id)?;
        args.add(self.award_id)?;
        args.add(self.event_date)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_bind_order_matches_statements() {
        let req = ResultRequest {
            competition_id: 1,
            sport_type_id: 6,
            athlete_id: 3,
            award_id: 2,
            event_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let mut args = PgArguments::default();
        req.bind(&mut args).unwrap();

        assert_eq!(args.len(), Results::INSERT_SQL.matches('$').count());
        assert_eq!(args.len() + 1, Results::UPDATE_SQL.matches('$').count());
    }

    #[test]
    fn test_list_orders_newest_first() {
        assert!(Results::LIST_SQL.contains("ORDER BY r.event_date DESC"));
    }
}
