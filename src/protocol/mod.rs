mod messages;

pub use messages::{DEFAULT_BACKEND_URL, GENERATE_QUIZ_PATH, QuizRequest, generate_endpoint};
