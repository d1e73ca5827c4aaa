use tokio::sync::mpsc;

use crate::generator::GeneratedQuiz;
use crate::timer::Token;

/// Events produced by background tasks for the UI loop.
///
/// Every event carries the token of the task that produced it; the loop
/// drops events whose token is no longer current.
#[derive(Debug)]
pub enum AppEvent {
    /// One second elapsed on a question countdown.
    Tick(Token),
    /// A generation task finished.
    QuizReady {
        token: Token,
        generated: GeneratedQuiz,
    },
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
