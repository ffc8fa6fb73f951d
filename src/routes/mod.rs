// Route exports
pub mod exam;

use crate::models::ErrorResponse;
use actix_web::{error, web, HttpResponse};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(exam::configure);
}

/// Handle JSON payload errors
///
/// Any body that fails to parse gets the same generic message; the parse
/// error itself is only logged.
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid JSON body".to_string(),
        details: None,
    });
    error::InternalError::from_response(err, response).into()
}
