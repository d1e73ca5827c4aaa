//! HTTP client for the quiz generation backend.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::models::{InvalidQuiz, Quiz};
use crate::protocol::{QuizRequest, generate_endpoint};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(StatusCode),
    #[error("backend returned an unusable quiz: {0}")]
    Invalid(#[from] InvalidQuiz),
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: generate_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Asks the backend for a quiz.
    ///
    /// The returned quiz always carries the requested timer, whatever the
    /// backend put in its response.
    pub async fn generate(&self, request: &QuizRequest) -> Result<Quiz, GenerateError> {
        debug!(endpoint = %self.endpoint, ?request, "requesting quiz from backend");

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status(status));
        }

        let mut quiz: Quiz = response.json().await?;
        quiz.timer_seconds = request.timer_seconds;
        quiz.validate()?;

        Ok(quiz)
    }
}
