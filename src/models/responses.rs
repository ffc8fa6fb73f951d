use serde::{Deserialize, Serialize};

/// Response for the generate-exam endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResponse {
    pub exam: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error response
///
/// `details` carries field-level validation failures and is omitted from the
/// wire format for every other error class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
