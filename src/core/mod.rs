// Core exports
pub mod prompt;
pub mod validate;

pub use prompt::build_exam_prompt;
pub use validate::parse_exam_request;
