use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::bank::BankQuestion;
use crate::models::NUM_OPTIONS;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: topic '{topic}' has no questions", .path.display())]
    EmptyTopic { path: PathBuf, topic: String },
    #[error("{}: topic '{topic}' question {index} has correct answer {answer}", .path.display())]
    AnswerOutOfRange {
        path: PathBuf,
        topic: String,
        index: usize,
        answer: usize,
    },
}

/// Reads a `{ "<topic>": [question, ...] }` bank file.
pub fn load_bank_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<HashMap<String, Vec<BankQuestion>>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let topics: HashMap<String, Vec<BankQuestion>> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    for (topic, questions) in &topics {
        if questions.is_empty() {
            return Err(LoadError::EmptyTopic {
                path: path.to_path_buf(),
                topic: topic.clone(),
            });
        }
        if let Some((index, question)) = questions
            .iter()
            .enumerate()
            .find(|(_, q)| q.correct_answer >= NUM_OPTIONS)
        {
            return Err(LoadError::AnswerOutOfRange {
                path: path.to_path_buf(),
                topic: topic.clone(),
                index,
                answer: question.correct_answer,
            });
        }
    }

    info!(path = %path.display(), topics = topics.len(), "loaded question bank file");
    Ok(topics)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_bank(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_bank() {
        let file = write_bank(
            r#"{
                "rust": [
                    {
                        "question": "Which trait enables `?` on Option and Result?",
                        "options": ["Try", "From", "Into", "Deref"],
                        "correctAnswer": 0,
                        "explanation": "The Try trait backs the question mark operator."
                    },
                    {
                        "question": "What does `Box<T>` allocate on?",
                        "options": ["Stack", "Heap", "Registers", "Disk"],
                        "correctAnswer": 1
                    }
                ]
            }"#,
        );

        let topics = load_bank_from_json(file.path()).unwrap();
        let rust = &topics["rust"];
        assert_eq!(rust.len(), 2);
        assert_eq!(rust[1].explanation, None);
    }

    #[test]
    fn test_missing_file() {
        let err = load_bank_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_bad_json() {
        let file = write_bank("{ not json");
        let err = load_bank_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_empty_topic_rejected() {
        let file = write_bank(r#"{ "rust": [] }"#);
        let err = load_bank_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyTopic { topic, .. } if topic == "rust"));
    }

    #[test]
    fn test_out_of_range_answer_rejected() {
        let file = write_bank(
            r#"{ "rust": [
                { "question": "q", "options": ["a", "b", "c", "d"], "correctAnswer": 4 }
            ] }"#,
        );
        let err = load_bank_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::AnswerOutOfRange { answer: 4, index: 0, .. }));
    }
}
