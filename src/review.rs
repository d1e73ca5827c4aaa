//! Per-question answer review shown on the results screen.

use crate::models::{AnswerMap, Question, Quiz};

pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// The user's pick on an option, if they picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionReview<'a> {
    pub label: char,
    pub text: &'a str,
    pub is_correct_answer: bool,
    pub pick: Option<Pick>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview<'a> {
    pub number: usize,
    pub question: &'a Question,
    pub user_answer: Option<usize>,
    pub is_correct: bool,
    pub options: Vec<OptionReview<'a>>,
}

impl QuestionReview<'_> {
    pub fn explanation(&self) -> Option<&str> {
        self.question.explanation.as_deref()
    }
}

pub fn review<'a>(quiz: &'a Quiz, answers: &AnswerMap) -> Vec<QuestionReview<'a>> {
    quiz.questions
        .iter()
        .enumerate()
        .map(|(index, question)| review_question(index + 1, question, answers.get(question.id)))
        .collect()
}

fn review_question(number: usize, question: &Question, user_answer: Option<usize>) -> QuestionReview<'_> {
    let is_correct = user_answer == Some(question.correct_answer);

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let pick = (user_answer == Some(index)).then_some(if is_correct {
                Pick::Correct
            } else {
                Pick::Wrong
            });
            OptionReview {
                label: OPTION_LABELS[index],
                text,
                is_correct_answer: index == question.correct_answer,
                pick,
            }
        })
        .collect();

    QuestionReview {
        number,
        question,
        user_answer,
        is_correct,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn quiz() -> Quiz {
        Quiz {
            title: "Review".to_string(),
            difficulty: Difficulty::Easy,
            timer_seconds: 0,
            questions: vec![
                Question {
                    id: 1,
                    text: "First".to_string(),
                    options: ["a", "b", "c", "d"].map(String::from),
                    correct_answer: 1,
                    explanation: Some("Because b.".to_string()),
                },
                Question {
                    id: 2,
                    text: "Second".to_string(),
                    options: ["a", "b", "c", "d"].map(String::from),
                    correct_answer: 3,
                    explanation: None,
                },
            ],
        }
    }

    #[test]
    fn test_correct_pick_marks_one_option_twice() {
        let quiz = quiz();
        let mut answers = AnswerMap::new();
        answers.record(1, 1);

        let items = review(&quiz, &answers);
        let first = &items[0];
        assert!(first.is_correct);

        let both: Vec<_> = first
            .options
            .iter()
            .filter(|o| o.is_correct_answer && o.pick == Some(Pick::Correct))
            .collect();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].label, 'B');
        assert!(first.options.iter().all(|o| o.pick != Some(Pick::Wrong)));
        assert_eq!(first.explanation(), Some("Because b."));
    }

    #[test]
    fn test_wrong_pick_marks_separate_options() {
        let quiz = quiz();
        let mut answers = AnswerMap::new();
        answers.record(2, 0);

        let second = &review(&quiz, &answers)[1];
        assert!(!second.is_correct);
        assert_eq!(second.options[0].pick, Some(Pick::Wrong));
        assert!(!second.options[0].is_correct_answer);
        assert!(second.options[3].is_correct_answer);
        assert_eq!(second.options[3].pick, None);
        assert_eq!(second.explanation(), None);
    }

    #[test]
    fn test_unanswered_question_has_no_picks() {
        let quiz = quiz();
        let items = review(&quiz, &AnswerMap::new());
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| !item.is_correct && item.user_answer.is_none()));
        assert!(items[0].options.iter().all(|o| o.pick.is_none()));
        assert_eq!(items[1].number, 2);
    }
}
