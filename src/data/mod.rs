mod bank;
mod loader;

pub use bank::{BankQuestion, DEFAULT_TOPIC, QuestionBank};
pub use loader::{LoadError, load_bank_from_json};
