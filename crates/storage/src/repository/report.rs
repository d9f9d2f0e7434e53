use sqlx::PgPool;

use crate::error::Result;
use crate::models::{CompetitionAward, FemaleAthlete};

/// Read-only reporting queries backing the reports view.
pub struct ReportRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReportRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Awards handed out at one competition in one sport, newest first.
    /// Re-expressed here as a plain join; the original kept it in a stored
    /// procedure with the same row shape.
    pub async fn awards_by_competition_and_sport(
        &self,
        competition_id: i32,
        sport_type_id: i32,
    ) -> Result<Vec<CompetitionAward>> {
        let rows = sqlx::query_as::<_, CompetitionAward>(
            r#"
            SELECT c.name AS competition_name,
                   st.name AS sport_type,
                   a.name AS athlete_name,
                   aw.name AS award_name,
                   r.event_date,
                   co.full_name AS coach_name
            FROM results r
            JOIN competitions c ON r.competition_id = c.id
            JOIN sport_types st ON r.sport_type_id = st.id
            JOIN athletes a ON r.athlete_id = a.id
            JOIN awards aw ON r.award_id = aw.id
            JOIN coaches co ON a.coach_id = co.id
            WHERE r.competition_id = $1 AND r.sport_type_id = $2
            ORDER BY r.event_date DESC
            "#,
        )
        .bind(competition_id)
        .bind(sport_type_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Female athletes aged 18 to 20 in the target year. The computation
    /// lives in a database function provisioned out-of-band; its inputs
    /// (gender, birth date) are not part of this schema, so the call stays
    /// a fixed black-box contract.
    pub async fn female_athletes_18_to_20(&self, year: i32) -> Result<Vec<FemaleAthlete>> {
        let rows = sqlx::query_as::<_, FemaleAthlete>(
            "SELECT * FROM sp_GetFemaleAthletes18to20($1)",
        )
        .bind(year)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
