use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or fully replacing a competition.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "A competition type reference is required"))]
    pub type_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_type_rejected() {
        let req = CompetitionRequest {
            name: "World Championship".to_string(),
            type_id: 0,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case_keys() {
        let req: CompetitionRequest =
            serde_json::from_str(r#"{"name":"World Championship","typeId":2}"#).unwrap();
        assert_eq!(req.type_id, 2);
        assert!(req.validate().is_ok());
    }
}
