use serde::{Deserialize, Serialize};
use validator::Validate;

/// A validated request to generate an exam.
///
/// Constraint checks (topic length, question count range) live on this type;
/// type-shape checks for raw JSON input happen in `core::validate` before an
/// instance is ever constructed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExamRequest {
    #[validate(length(min = 1, max = 100, message = "topic must be between 1 and 100 characters"))]
    pub topic: String,
    #[validate(range(min = 1, max = 50, message = "count must be between 1 and 50"))]
    pub count: i64,
    #[serde(default)]
    #[serde(alias = "include_answers", rename = "includeAnswers")]
    pub include_answers: bool,
}
