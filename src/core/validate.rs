use crate::models::ExamRequest;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Parse and validate an arbitrary JSON body into an [`ExamRequest`].
///
/// Pure function: type-shape failures (missing fields, wrong JSON types) and
/// constraint failures (length, range) are both reported as field-level
/// [`ValidationErrors`], so the handler can return one uniform `details`
/// object. The returned request is normalized: `topic` is trimmed and an
/// absent `includeAnswers` defaults to false.
pub fn parse_exam_request(body: &Value) -> Result<ExamRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let obj = body.as_object();

    let topic = match obj.and_then(|o| o.get("topic")) {
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => {
            errors.add("topic", field_error("type", "topic must be a string"));
            None
        }
        None => {
            errors.add("topic", field_error("required", "topic is required"));
            None
        }
    };

    // as_i64 rejects floats and numeric strings, matching the integer-only rule
    let count = match obj.and_then(|o| o.get("count")) {
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                errors.add("count", field_error("type", "count must be an integer"));
                None
            }
        },
        None => {
            errors.add("count", field_error("required", "count is required"));
            None
        }
    };

    let include_answers = match obj.and_then(|o| o.get("includeAnswers")) {
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            errors.add(
                "includeAnswers",
                field_error("type", "includeAnswers must be a boolean"),
            );
            None
        }
        None => Some(false),
    };

    // Constraint checks run on whichever fields parsed, so a shape error on
    // one field never hides a range or length violation on another. Fields
    // that already failed the shape check get stand-in values the derive
    // accepts and are reported at most once.
    let request = ExamRequest {
        topic: topic.unwrap_or_else(|| "-".to_string()),
        count: count.unwrap_or(1),
        include_answers: include_answers.unwrap_or(false),
    };
    if let Err(constraint_errors) = request.validate() {
        for (field, field_errors) in constraint_errors.field_errors() {
            for error in field_errors {
                errors.add(field, error.clone());
            }
        }
    }

    if errors.is_empty() {
        Ok(request)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_minimal_request() {
        let request = parse_exam_request(&json!({"topic": "Fractions", "count": 5})).unwrap();
        assert_eq!(request.topic, "Fractions");
        assert_eq!(request.count, 5);
        assert!(!request.include_answers);
    }

    #[test]
    fn test_trims_topic() {
        let request = parse_exam_request(&json!({"topic": "  Addition  ", "count": 1})).unwrap();
        assert_eq!(request.topic, "Addition");
    }

    #[test]
    fn test_rejects_non_object_body() {
        let errors = parse_exam_request(&json!([1, 2, 3])).unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("topic"));
        assert!(fields.contains_key("count"));
    }
}
