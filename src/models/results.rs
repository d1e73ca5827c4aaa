use super::{AnswerMap, Quiz};

/// Score snapshot computed when a quiz is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub passed: bool,
}

/// Pass mark as a ratio, numerator over denominator (70%).
const PASS_NUMERATOR: usize = 7;
const PASS_DENOMINATOR: usize = 10;

impl QuizResults {
    /// Scores every question in the quiz against the recorded answers.
    pub fn compute(quiz: &Quiz, answers: &AnswerMap) -> Self {
        let total = quiz.questions.len();
        let correct = quiz
            .questions
            .iter()
            .filter(|question| answers.get(question.id) == Some(question.correct_answer))
            .count();

        Self::from_counts(correct, total)
    }

    pub fn from_counts(correct: usize, total: usize) -> Self {
        if total == 0 {
            return Self {
                correct: 0,
                total: 0,
                percentage: 0,
                passed: false,
            };
        }

        // round half up without going through floats
        let percentage = ((200 * correct + total) / (2 * total)) as u32;
        let passed = correct * PASS_DENOMINATOR >= total * PASS_NUMERATOR;

        Self {
            correct,
            total,
            percentage,
            passed,
        }
    }

    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage)
    }

    pub fn message(&self) -> &'static str {
        match self.percentage {
            90.. => "Outstanding!",
            80..=89 => "Excellent work!",
            70..=79 => "Good job!",
            60..=69 => "Not bad, keep practicing!",
            _ => "Keep learning and try again!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => ScoreBand::Excellent,
            70..=79 => ScoreBand::Good,
            60..=69 => ScoreBand::Average,
            _ => ScoreBand::Poor,
        }
    }
}
