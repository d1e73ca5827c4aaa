use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{NUM_OPTIONS, Question};

/// Topic used when a requested topic has no bank of its own.
pub const DEFAULT_TOPIC: &str = "javascript";

/// A bank entry. Same field names as a generated question, minus the id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankQuestion {
    #[serde(rename = "question")]
    pub text: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl BankQuestion {
    pub fn to_question(&self, id: u32) -> Question {
        Question {
            id,
            text: self.text.clone(),
            options: self.options.clone(),
            correct_answer: self.correct_answer,
            explanation: self.explanation.clone(),
        }
    }
}

/// Topic key to ordered question list. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    topics: HashMap<String, Vec<BankQuestion>>,
}

impl QuestionBank {
    pub fn builtin() -> Self {
        let topics = BUILTIN
            .iter()
            .map(|(topic, entries)| {
                let questions = entries
                    .iter()
                    .map(|(text, options, correct_answer, explanation)| BankQuestion {
                        text: text.to_string(),
                        options: options.map(String::from),
                        correct_answer: *correct_answer,
                        explanation: Some(explanation.to_string()),
                    })
                    .collect();
                (topic.to_string(), questions)
            })
            .collect();

        Self { topics }
    }

    /// Layers extra topics over this bank; same-key topics are replaced.
    /// Keys are lowercased so lookups stay case-insensitive.
    pub fn with_topics(mut self, extra: HashMap<String, Vec<BankQuestion>>) -> Self {
        for (topic, questions) in extra {
            self.topics.insert(topic.to_lowercase(), questions);
        }
        self
    }

    /// Questions for a topic, falling back to the default topic.
    pub fn lookup(&self, topic: &str) -> &[BankQuestion] {
        self.topics
            .get(&topic.to_lowercase())
            .filter(|questions| !questions.is_empty())
            .or_else(|| self.topics.get(DEFAULT_TOPIC))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.contains_key(&topic.to_lowercase())
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

type Entry = (&'static str, [&'static str; NUM_OPTIONS], usize, &'static str);

const BUILTIN: &[(&str, &[Entry])] = &[
    (
        "javascript",
        &[
            (
                "What is the correct way to declare a variable in JavaScript?",
                ["var myVar;", "variable myVar;", "v myVar;", "declare myVar;"],
                0,
                "The 'var' keyword is used to declare variables in JavaScript, though 'let' and 'const' are more modern alternatives.",
            ),
            (
                "Which method is used to add an element to the end of an array?",
                ["push()", "pop()", "shift()", "unshift()"],
                0,
                "The push() method adds one or more elements to the end of an array and returns the new length.",
            ),
            (
                "What does '===' operator do in JavaScript?",
                ["Assignment", "Equality with type conversion", "Strict equality", "Not equal"],
                2,
                "The '===' operator checks for strict equality, comparing both value and type without type conversion.",
            ),
            (
                "Which of these is NOT a JavaScript data type?",
                ["string", "boolean", "float", "undefined"],
                2,
                "JavaScript uses 'number' for all numeric values, there's no separate 'float' type.",
            ),
            (
                "What is a closure in JavaScript?",
                [
                    "A loop construct",
                    "A function with access to outer scope",
                    "A data structure",
                    "An error type",
                ],
                1,
                "A closure is a function that has access to variables in its outer (enclosing) scope even after the outer function has returned.",
            ),
        ],
    ),
    (
        "python",
        &[
            (
                "Which keyword is used to define a function in Python?",
                ["function", "def", "define", "func"],
                1,
                "The 'def' keyword is used to define functions in Python.",
            ),
            (
                "What is the correct way to create a list in Python?",
                ["list = {1, 2, 3}", "list = [1, 2, 3]", "list = (1, 2, 3)", "list = <1, 2, 3>"],
                1,
                "Square brackets [] are used to create lists in Python.",
            ),
            (
                "Which method is used to add an item to a list?",
                ["add()", "append()", "insert()", "push()"],
                1,
                "The append() method adds an item to the end of a list.",
            ),
        ],
    ),
    (
        "history",
        &[
            (
                "In which year did World War II end?",
                ["1944", "1945", "1946", "1947"],
                1,
                "World War II ended in 1945 with the surrender of Japan in September.",
            ),
            (
                "Who was the first President of the United States?",
                ["Thomas Jefferson", "John Adams", "George Washington", "Benjamin Franklin"],
                2,
                "George Washington was the first President of the United States, serving from 1789 to 1797.",
            ),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_topics() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.topic_count(), 3);
        assert_eq!(bank.lookup("javascript").len(), 5);
        assert_eq!(bank.lookup("python").len(), 3);
        assert_eq!(bank.lookup("history").len(), 2);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.lookup("PyThOn"), bank.lookup("python"));
    }

    #[test]
    fn test_unknown_topic_uses_default() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.lookup("geology"), bank.lookup(DEFAULT_TOPIC));
        assert_eq!(bank.lookup(""), bank.lookup(DEFAULT_TOPIC));
    }

    #[test]
    fn test_builtin_answers_in_range() {
        let bank = QuestionBank::builtin();
        for topic in ["javascript", "python", "history"] {
            for entry in bank.lookup(topic) {
                assert!(entry.correct_answer < NUM_OPTIONS, "{}", entry.text);
            }
        }
    }

    #[test]
    fn test_with_topics_replaces_and_adds() {
        let entry = BankQuestion {
            text: "What is 2 + 2?".to_string(),
            options: ["3", "4", "5", "22"].map(String::from),
            correct_answer: 1,
            explanation: None,
        };
        let extra = HashMap::from([
            ("Math".to_string(), vec![entry.clone()]),
            ("history".to_string(), vec![entry.clone()]),
        ]);

        let bank = QuestionBank::builtin().with_topics(extra);
        assert!(bank.has_topic("math"));
        assert_eq!(bank.lookup("MATH"), &[entry.clone()]);
        assert_eq!(bank.lookup("history"), &[entry]);
        assert_eq!(bank.lookup("python").len(), 3);
    }
}
