//! Wire types for the quiz generation backend.
//!
//! Requests are JSON over HTTP. The response body is a [`Quiz`] as-is.
//!
//! [`Quiz`]: crate::models::Quiz

use serde::{Deserialize, Serialize};

use crate::models::Difficulty;

/// Path of the generation endpoint, relative to the backend base URL.
pub const GENERATE_QUIZ_PATH: &str = "/generate-quiz";

/// Default backend base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Parameters for one quiz, as produced by the generator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub question_count: u32,
    /// Seconds per question, 0 means untimed.
    #[serde(rename = "timer")]
    pub timer_seconds: u32,
}

/// Joins a base URL and the generation path without doubling slashes.
pub fn generate_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GENERATE_QUIZ_PATH)
}
