use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or fully replacing a coach.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachRequest {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_required() {
        let req = CoachRequest {
            full_name: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case_key() {
        let req: CoachRequest = serde_json::from_str(r#"{"fullName":"J. Smith"}"#).unwrap();
        assert_eq!(req.full_name, "J. Smith");
        assert!(req.validate().is_ok());
    }
}
