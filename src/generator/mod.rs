//! Quiz request building and generation.
//!
//! Generation prefers the backend and falls back to the local question
//! bank on any failure, so callers always receive a quiz.

mod fallback;
mod form;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::client::BackendClient;
use crate::data::QuestionBank;
use crate::models::Quiz;
use crate::protocol::QuizRequest;

pub use fallback::synthesize;
pub use form::{
    FormField, NumberField, QUESTION_COUNT_MAX, QUESTION_COUNT_MIN, QuizForm, TIMER_MAX,
    TIMER_MIN,
};

/// Pause before serving a fallback quiz.
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSource {
    Backend,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    pub quiz: Quiz,
    pub source: QuizSource,
}

#[derive(Debug, Clone)]
pub struct QuizGenerator {
    backend: Option<BackendClient>,
    bank: Arc<QuestionBank>,
    fallback_delay: Duration,
}

impl QuizGenerator {
    pub fn new(backend: Option<BackendClient>, bank: QuestionBank, fallback_delay: Duration) -> Self {
        Self {
            backend,
            bank: Arc::new(bank),
            fallback_delay,
        }
    }

    /// A generator that never contacts a backend.
    pub fn offline(bank: QuestionBank, fallback_delay: Duration) -> Self {
        Self::new(None, bank, fallback_delay)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub async fn generate(&self, request: &QuizRequest) -> GeneratedQuiz {
        if let Some(backend) = &self.backend {
            match backend.generate(request).await {
                Ok(quiz) => {
                    info!(
                        title = %quiz.title,
                        questions = quiz.questions.len(),
                        "quiz generated by backend"
                    );
                    return GeneratedQuiz {
                        quiz,
                        source: QuizSource::Backend,
                    };
                }
                Err(err) => {
                    warn!(
                        endpoint = backend.endpoint(),
                        error = %err,
                        "backend unavailable, using local question bank"
                    );
                }
            }
        }

        tokio::time::sleep(self.fallback_delay).await;

        let quiz = synthesize(&self.bank, request);
        info!(
            topic = %request.topic,
            questions = quiz.questions.len(),
            "quiz synthesized from local bank"
        );
        GeneratedQuiz {
            quiz,
            source: QuizSource::Fallback,
        }
    }
}
