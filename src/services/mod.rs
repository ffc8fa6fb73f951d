// Service exports
pub mod gemini;

pub use gemini::{GeminiClient, GeminiError};
