use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by create endpoints: the newly assigned identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
}

/// Acknowledgment body returned by update and delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Dashboard row counts, one per fact table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntityCounts {
    pub athletes: i64,
    pub coaches: i64,
    pub competitions: i64,
    pub awards: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_as_flag() {
        let body = serde_json::to_string(&SuccessResponse::ok()).unwrap();
        assert_eq!(body, r#"{"success":true}"#);
    }

    #[test]
    fn test_created_serializes_identity() {
        let body = serde_json::to_string(&CreatedResponse { id: 1 }).unwrap();
        assert_eq!(body, r#"{"id":1}"#);
    }
}
