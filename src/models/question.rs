use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NUM_OPTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    #[serde(rename = "question")]
    pub text: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A generated quiz. Never mutated once handed to the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    pub difficulty: Difficulty,
    /// Seconds per question, 0 means untimed.
    #[serde(rename = "timer", default)]
    pub timer_seconds: u32,
    pub questions: Vec<Question>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidQuiz {
    #[error("quiz has no questions")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateId(u32),
    #[error("question {id} has correct answer {index}, expected an index below 4")]
    AnswerOutOfRange { id: u32, index: usize },
}

impl Quiz {
    pub fn has_timer(&self) -> bool {
        self.timer_seconds > 0
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Total time budget across all questions, if timed.
    pub fn total_seconds(&self) -> Option<u32> {
        self.has_timer()
            .then(|| self.timer_seconds.saturating_mul(self.questions.len() as u32))
    }

    pub fn validate(&self) -> Result<(), InvalidQuiz> {
        if self.questions.is_empty() {
            return Err(InvalidQuiz::Empty);
        }

        let mut seen = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(InvalidQuiz::DuplicateId(question.id));
            }
            if question.correct_answer >= NUM_OPTIONS {
                return Err(InvalidQuiz::AnswerOutOfRange {
                    id: question.id,
                    index: question.correct_answer,
                });
            }
        }

        Ok(())
    }
}

/// Formats seconds as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
