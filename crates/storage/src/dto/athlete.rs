use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or fully replacing an athlete.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(custom(function = "validate_athlete_type"))]
    pub athlete_type: String,

    #[validate(range(min = 1, message = "A sport type reference is required"))]
    pub sport_type_id: i32,

    #[validate(range(min = 1, message = "A coach reference is required"))]
    pub coach_id: i32,
}

fn validate_athlete_type(athlete_type: &str) -> Result<(), validator::ValidationError> {
    const VALID_TYPES: &[&str] = &["Individual", "Team"];

    if VALID_TYPES.contains(&athlete_type) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_athlete_type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> AthleteRequest {
        AthleteRequest {
            name: "A. Lee".to_string(),
            athlete_type: "Individual".to_string(),
            sport_type_id: 1,
            coach_id: 1,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut req = valid_request();
        req.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let mut req = valid_request();
        req.athlete_type = "Pair".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_team_type_accepted() {
        let mut req = valid_request();
        req.athlete_type = "Team".to_string();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_zero_reference_rejected() {
        let mut req = valid_request();
        req.coach_id = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case_keys() {
        let req: AthleteRequest = serde_json::from_str(
            r#"{"name":"A. Lee","type":"Individual","sportTypeId":2,"coachId":3}"#,
        )
        .unwrap();
        assert_eq!(req.athlete_type, "Individual");
        assert_eq!(req.sport_type_id, 2);
        assert_eq!(req.coach_id, 3);
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let result: Result<AthleteRequest, _> =
            serde_json::from_str(r#"{"name":"A. Lee","type":"Individual"}"#);
        assert!(result.is_err());
    }
}
