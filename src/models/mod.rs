mod answers;
mod question;
mod results;

pub use answers::AnswerMap;
pub use question::{Difficulty, InvalidQuiz, NUM_OPTIONS, Question, Quiz, format_time};
pub use results::{QuizResults, ScoreBand};
