//! Examgen - math exam generation service
//!
//! A small HTTP service that validates an exam request (topic, question
//! count, answer-key flag), builds a generation prompt, and relays the
//! Gemini API's plain-text completion back to the client.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_exam_prompt, parse_exam_request};
pub use crate::models::{ErrorResponse, ExamRequest, ExamResponse, HealthResponse};
pub use crate::services::{GeminiClient, GeminiError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let request = ExamRequest {
            topic: "Fractions".to_string(),
            count: 3,
            include_answers: false,
        };
        let prompt = build_exam_prompt(&request);
        assert!(prompt.contains("Fractions"));
    }
}
