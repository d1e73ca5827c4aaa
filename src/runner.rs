//! Question-by-question quiz runner with optional per-question countdown.
//!
//! The runner owns no clock. The caller feeds it one [`QuizRunner::tick`]
//! per elapsed second while a timed question is on screen.

use tracing::debug;

use crate::models::{AnswerMap, Question, Quiz, QuizResults};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    NotStarted,
    Active {
        index: usize,
        /// `None` when the quiz is untimed.
        remaining: Option<u32>,
    },
    Finished,
}

/// What a navigation action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(usize),
    Finished(QuizResults),
    Blocked,
}

/// What one elapsed second did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not active or untimed; nothing to count.
    Idle,
    Counting(u32),
    /// The question timed out and the next one is up.
    Advanced(usize),
    /// The last question timed out and the quiz was submitted.
    Finished(QuizResults),
}

#[derive(Debug, Clone)]
pub struct QuizRunner {
    quiz: Quiz,
    answers: AnswerMap,
    state: RunnerState,
}

impl QuizRunner {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            answers: AnswerMap::new(),
            state: RunnerState::NotStarted,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn has_timer(&self) -> bool {
        self.quiz.has_timer()
    }

    fn initial_timer(&self) -> Option<u32> {
        self.has_timer().then_some(self.quiz.timer_seconds)
    }

    pub fn start(&mut self) -> bool {
        if self.state != RunnerState::NotStarted || self.quiz.is_empty() {
            return false;
        }
        self.state = RunnerState::Active {
            index: 0,
            remaining: self.initial_timer(),
        };
        debug!(title = %self.quiz.title, "quiz started");
        true
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            RunnerState::Active { index, .. } => Some(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.quiz.questions.get(index))
    }

    pub fn time_remaining(&self) -> Option<u32> {
        match self.state {
            RunnerState::Active { remaining, .. } => remaining,
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|index| index + 1 == self.quiz.questions.len())
    }

    /// The recorded selection for the question on screen.
    pub fn current_answer(&self) -> Option<usize> {
        self.current_question()
            .and_then(|question| self.answers.get(question.id))
    }

    /// Whether the question on screen has been answered. Option 0 counts.
    pub fn current_answered(&self) -> bool {
        self.current_answer().is_some()
    }

    fn time_expired(&self) -> bool {
        self.time_remaining() == Some(0)
    }

    /// Records an answer for the question on screen.
    ///
    /// Rejected once that question's time has run out.
    pub fn select(&mut self, option: usize) -> bool {
        if self.time_expired() {
            return false;
        }
        let Some(question) = self.current_question() else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }
        let id = question.id;
        self.answers.record(id, option);
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.has_timer() && self.current_index().is_some_and(|index| index > 0)
    }

    /// Moves to the next question, or submits on the last one.
    /// Requires an answer for the question on screen.
    pub fn next(&mut self) -> Step {
        if !self.current_answered() {
            return Step::Blocked;
        }
        self.advance()
    }

    /// Submits from the last question. Requires an answer for it.
    pub fn submit(&mut self) -> Option<QuizResults> {
        if !self.is_last_question() || !self.current_answered() {
            return None;
        }
        Some(self.finish())
    }

    /// Goes back one question. Only untimed quizzes allow this.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        if let RunnerState::Active { index, .. } = &mut self.state {
            *index -= 1;
            return true;
        }
        false
    }

    /// Counts down one second on the question on screen.
    pub fn tick(&mut self) -> TickOutcome {
        let RunnerState::Active {
            index,
            remaining: Some(remaining),
        } = &mut self.state
        else {
            return TickOutcome::Idle;
        };

        *remaining = remaining.saturating_sub(1);
        if *remaining > 0 {
            return TickOutcome::Counting(*remaining);
        }

        debug!(question = *index + 1, "question timed out");
        match self.advance() {
            Step::Moved(index) => TickOutcome::Advanced(index),
            Step::Finished(results) => TickOutcome::Finished(results),
            Step::Blocked => TickOutcome::Idle,
        }
    }

    fn advance(&mut self) -> Step {
        let Some(index) = self.current_index() else {
            return Step::Blocked;
        };

        if index + 1 < self.quiz.questions.len() {
            self.state = RunnerState::Active {
                index: index + 1,
                remaining: self.initial_timer(),
            };
            Step::Moved(index + 1)
        } else {
            Step::Finished(self.finish())
        }
    }

    fn finish(&mut self) -> QuizResults {
        self.state = RunnerState::Finished;
        QuizResults::compute(&self.quiz, &self.answers)
    }

    pub fn results(&self) -> QuizResults {
        QuizResults::compute(&self.quiz, &self.answers)
    }

    pub fn into_parts(self) -> (Quiz, AnswerMap) {
        (self.quiz, self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn quiz(count: usize, timer_seconds: u32) -> Quiz {
        Quiz {
            title: "Runner".to_string(),
            difficulty: Difficulty::Medium,
            timer_seconds,
            questions: (0..count)
                .map(|i| Question {
                    id: i as u32 + 1,
                    text: format!("Question {}", i + 1),
                    options: ["a", "b", "c", "d"].map(String::from),
                    correct_answer: i % 4,
                    explanation: None,
                })
                .collect(),
        }
    }

    fn started(count: usize, timer_seconds: u32) -> QuizRunner {
        let mut runner = QuizRunner::new(quiz(count, timer_seconds));
        assert!(runner.start());
        runner
    }

    #[test]
    fn test_start() {
        let mut runner = QuizRunner::new(quiz(3, 15));
        assert_eq!(runner.state(), RunnerState::NotStarted);
        assert!(!runner.select(0));

        assert!(runner.start());
        assert_eq!(
            runner.state(),
            RunnerState::Active {
                index: 0,
                remaining: Some(15)
            }
        );
        assert!(!runner.start());
    }

    #[test]
    fn test_untimed_start_has_no_countdown() {
        let mut runner = started(2, 0);
        assert_eq!(runner.time_remaining(), None);
        assert_eq!(runner.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_zero_is_answered() {
        let mut runner = started(2, 0);
        assert_eq!(runner.next(), Step::Blocked);
        assert!(runner.select(0));
        assert!(runner.current_answered());
        assert_eq!(runner.next(), Step::Moved(1));
    }

    #[test]
    fn test_submit_requires_answer() {
        let mut runner = started(1, 0);
        assert_eq!(runner.submit(), None);
        runner.select(0);
        let results = runner.submit().unwrap();
        assert_eq!(results.correct, 1);
        assert_eq!(runner.state(), RunnerState::Finished);
    }

    #[test]
    fn test_submit_only_from_last_question() {
        let mut runner = started(2, 0);
        runner.select(0);
        assert_eq!(runner.submit(), None);
        assert_eq!(runner.current_index(), Some(0));

        assert_eq!(runner.next(), Step::Moved(1));
        runner.select(0);
        assert!(runner.submit().is_some());
        assert_eq!(runner.state(), RunnerState::Finished);
    }

    #[test]
    fn test_select_overwrites_and_rejects_bad_index() {
        let mut runner = started(1, 0);
        assert!(runner.select(2));
        assert!(runner.select(1));
        assert!(!runner.select(4));
        assert_eq!(runner.current_answer(), Some(1));
        assert_eq!(runner.answers().len(), 1);
    }

    #[test]
    fn test_next_on_last_question_submits() {
        let mut runner = started(2, 0);
        runner.select(0);
        runner.next();
        runner.select(0);
        match runner.next() {
            Step::Finished(results) => {
                assert_eq!(results.correct, 1);
                assert_eq!(results.total, 2);
                assert_eq!(results.percentage, 50);
            }
            other => panic!("expected finish, got {:?}", other),
        }
    }

    #[test]
    fn test_untimed_back_navigation_preserves_answer() {
        let mut runner = started(3, 0);
        runner.select(3);
        runner.next();
        assert_eq!(runner.current_index(), Some(1));
        assert!(runner.can_go_back());

        assert!(runner.previous());
        assert_eq!(runner.current_index(), Some(0));
        assert_eq!(runner.current_answer(), Some(3));
        assert_eq!(runner.time_remaining(), None);
        assert!(!runner.previous());
    }

    #[test]
    fn test_timed_quiz_is_forward_only() {
        let mut runner = started(3, 30);
        runner.select(0);
        runner.next();
        assert!(!runner.can_go_back());
        assert!(!runner.previous());
        assert_eq!(runner.current_index(), Some(1));
    }

    #[test]
    fn test_advance_resets_timer() {
        let mut runner = started(2, 15);
        for _ in 0..10 {
            runner.tick();
        }
        assert_eq!(runner.time_remaining(), Some(5));
        runner.select(1);
        runner.next();
        assert_eq!(runner.time_remaining(), Some(15));
    }

    #[test]
    fn test_timeout_advances_then_finishes() {
        let mut runner = started(3, 15);

        // answer q1 in time, leave q2 blank, answer q3 in time
        runner.select(0);
        for _ in 0..14 {
            assert!(matches!(runner.tick(), TickOutcome::Counting(_)));
        }
        assert_eq!(runner.tick(), TickOutcome::Advanced(1));

        for _ in 0..14 {
            runner.tick();
        }
        assert_eq!(runner.tick(), TickOutcome::Advanced(2));

        runner.select(2);
        for _ in 0..14 {
            runner.tick();
        }
        let TickOutcome::Finished(results) = runner.tick() else {
            panic!("quiz should finish after the last timeout");
        };

        assert_eq!(runner.state(), RunnerState::Finished);
        assert_eq!(results.total, 3);
        assert_eq!(results.correct, 2);
        assert_eq!(runner.answers().get(1), Some(0));
        assert_eq!(runner.answers().get(2), None);
        assert_eq!(runner.answers().get(3), Some(2));
        assert_eq!(runner.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_expired_question_rejects_selection() {
        let mut runner = started(1, 5);
        runner.state = RunnerState::Active {
            index: 0,
            remaining: Some(0),
        };
        assert!(!runner.select(0));
        assert!(!runner.current_answered());
    }

    #[test]
    fn test_into_parts_keeps_answers() {
        let mut runner = started(2, 0);
        runner.select(1);
        let (quiz, answers) = runner.into_parts();
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(answers.get(1), Some(1));
    }
}
