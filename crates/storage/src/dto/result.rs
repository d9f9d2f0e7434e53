use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or fully replacing a result.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultRequest {
    #[validate(range(min = 1, message = "A competition reference is required"))]
    pub competition_id: i32,

    #[validate(range(min = 1, message = "A sport type reference is required"))]
    pub sport_type_id: i32,

    #[validate(range(min = 1, message = "An athlete reference is required"))]
    pub athlete_id: i32,

    #[validate(range(min = 1, message = "An award reference is required"))]
    pub award_id: i32,

    pub event_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_iso_date() {
        let req: ResultRequest = serde_json::from_str(
            r#"{"competitionId":1,"sportTypeId":6,"athleteId":3,"awardId":2,"eventDate":"2025-03-01"}"#,
        )
        .unwrap();
        assert_eq!(req.event_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_malformed_date_fails_deserialization() {
        let result: Result<ResultRequest, _> = serde_json::from_str(
            r#"{"competitionId":1,"sportTypeId":6,"athleteId":3,"awardId":2,"eventDate":"not-a-date"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_award_rejected() {
        let req = ResultRequest {
            competition_id: 1,
            sport_type_id: 1,
            athlete_id: 1,
            award_id: 0,
            event_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        assert!(req.validate().is_err());
    }
}
