// Model exports
pub mod requests;
pub mod responses;

pub use requests::ExamRequest;
pub use responses::{ErrorResponse, ExamResponse, HealthResponse};
