use crate::core::{build_exam_prompt, parse_exam_request};
use crate::models::{ErrorResponse, ExamResponse, HealthResponse};
use crate::services::GeminiClient;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
///
/// The Gemini client is `None` when no API key was configured at startup;
/// every generation request then fails uniformly with a configuration error.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Option<Arc<GeminiClient>>,
}

/// Configure all exam-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/generate-exam", web::post().to(generate_exam));
}

/// Health check endpoint
///
/// Always reports ok; the service has no backing stores to probe.
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Generate exam endpoint
///
/// POST /generate-exam
///
/// Request body:
/// ```json
/// {
///   "topic": "Fractions",
///   "count": 10,
///   "includeAnswers": false
/// }
/// ```
///
/// The configuration check runs before validation so a server without a
/// credential rejects every request the same way, instead of only the ones
/// that would have reached the provider.
async fn generate_exam(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let Some(gemini) = state.gemini.as_ref() else {
        tracing::error!("Rejecting generate-exam request: no Gemini API key configured");
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Gemini API key not configured on server".to_string(),
            details: None,
        });
    };

    let request = match parse_exam_request(&body) {
        Ok(request) => request,
        Err(errors) => {
            tracing::info!("Validation failed for generate-exam request: {:?}", errors);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid input".to_string(),
                details: Some(serde_json::json!(errors)),
            });
        }
    };

    tracing::info!(
        "Generating exam: topic={:?}, count={}, answer_key={}",
        request.topic,
        request.count,
        request.include_answers
    );

    let prompt = build_exam_prompt(&request);

    match gemini.generate_content(&prompt).await {
        Ok(text) => HttpResponse::Ok().json(ExamResponse { exam: text }),
        Err(e) => {
            tracing::error!("Exam generation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate exam".to_string(),
                details: None,
            })
        }
    }
}
