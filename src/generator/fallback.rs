use crate::data::QuestionBank;
use crate::models::Quiz;
use crate::protocol::QuizRequest;

/// Builds a quiz from the local bank.
///
/// Cycles through the topic's questions in order until the requested
/// count is reached. Ids are assigned 1, 2, 3, ... in that order.
pub fn synthesize(bank: &QuestionBank, request: &QuizRequest) -> Quiz {
    let entries = bank.lookup(&request.topic);

    let questions = if entries.is_empty() {
        Vec::new()
    } else {
        (0..request.question_count as usize)
            .map(|i| entries[i % entries.len()].to_question(i as u32 + 1))
            .collect()
    };

    Quiz {
        title: format!("{} Quiz", request.topic),
        difficulty: request.difficulty,
        timer_seconds: request.timer_seconds,
        questions,
    }
}
