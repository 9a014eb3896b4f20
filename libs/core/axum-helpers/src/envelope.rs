//! Success bodies shared by every resource.

use serde::Serialize;
use utoipa::ToSchema;

/// `{"data": ...}` wrapper for reads.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{"id": n}` returned after a create.
#[derive(Debug, Serialize, ToSchema)]
pub struct IdResponse {
    #[schema(example = 1)]
    pub id: i32,
}

/// `{"success": true}` returned by mutations that carry no payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelopes_serialize_to_expected_shapes() {
        assert_eq!(
            serde_json::to_value(DataResponse::new(vec![1, 2])).unwrap(),
            json!({"data": [1, 2]})
        );
        assert_eq!(
            serde_json::to_value(IdResponse { id: 7 }).unwrap(),
            json!({"id": 7})
        );
        assert_eq!(
            serde_json::to_value(SuccessResponse::ok()).unwrap(),
            json!({"success": true})
        );
    }
}
