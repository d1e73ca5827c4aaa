//! # quizgen
//!
//! Generate a multiple-choice quiz on a topic, take it in the terminal with
//! an optional per-question countdown, then review the answers.
//!
//! Quizzes come from a remote generation service when one is reachable and
//! from a local question bank otherwise.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizgen::{Config, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = Config::load(None)?;
//!     let generator = quizgen::build_generator(&config)?;
//!     quizgen::run(generator)
//! }
//! ```

mod app;
pub mod client;
pub mod config;
pub mod data;
mod event;
pub mod generator;
pub mod logging;
pub mod models;
pub mod protocol;
pub mod review;
pub mod runner;
mod terminal;
mod timer;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self as input, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;
use tracing::info;

use crate::app::{App, Screen};
use crate::event::EventReceiver;
use crate::generator::FormField;
use crate::terminal::AppTerminal;

pub use client::{BackendClient, GenerateError};
pub use config::{Config, ConfigError};
pub use data::{LoadError, QuestionBank};
pub use generator::{GeneratedQuiz, QuizGenerator, QuizSource};
pub use models::{Difficulty, Question, Quiz, QuizResults};
pub use runner::QuizRunner;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to load question bank: {0}")]
    Load(#[from] LoadError),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Builds the quiz generator described by `config`: the built-in bank plus
/// any external bank file, and a backend client unless running offline.
pub fn build_generator(config: &Config) -> Result<QuizGenerator, QuizError> {
    let mut bank = QuestionBank::builtin();
    if let Some(path) = &config.question_bank {
        bank = bank.with_topics(data::load_bank_from_json(path)?);
    }

    let backend = if config.offline {
        info!("offline mode, backend disabled");
        None
    } else {
        Some(BackendClient::new(&config.backend_url, config.request_timeout())?)
    };

    Ok(QuizGenerator::new(backend, bank, config.fallback_delay()))
}

/// Runs the quiz session until the user quits.
///
/// Takes over the terminal and restores it on return. Must be called from
/// within a Tokio runtime; generation and countdowns run as spawned tasks.
pub fn run(generator: QuizGenerator) -> Result<(), QuizError> {
    let (tx, mut rx) = event::channel();
    let mut app = App::new(generator, tx);

    let mut terminal = terminal::TerminalGuard::new()?;
    let result = run_event_loop(&mut terminal, &mut app, &mut rx);
    info!("session ended");
    result
}

fn run_event_loop(
    terminal: &mut AppTerminal,
    app: &mut App,
    rx: &mut EventReceiver,
) -> Result<(), QuizError> {
    while !app.should_quit {
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if input::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = input::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_input(app, key);
                }
            }
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match &app.screen {
        Screen::Home { .. } => handle_home_input(app, key.code),
        Screen::Generator(screen) if screen.is_generating() => handle_generating_input(app, key.code),
        Screen::Generator(_) => handle_generator_input(app, key.code),
        Screen::Quiz(screen) if screen.runner.current_index().is_none() => {
            handle_preview_input(app, key.code)
        }
        Screen::Quiz(_) => handle_quiz_input(app, key.code),
        Screen::Results(_) => handle_results_input(app, key.code),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_category(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_category(),
        KeyCode::Enter => app.choose_category(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_generating_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Esc {
        app.back();
    }
}

fn handle_generator_input(app: &mut App, key: KeyCode) {
    let Some(form) = app.form_mut() else {
        return;
    };
    let editing_topic = form.focus() == FormField::Topic;

    match key {
        KeyCode::Esc => app.back(),
        KeyCode::Enter => app.generate(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
        KeyCode::Left => form.cycle(false),
        KeyCode::Right => form.cycle(true),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if editing_topic => form.input_char(c),
        KeyCode::Char('h') => form.cycle(false),
        KeyCode::Char('l') => form.cycle(true),
        KeyCode::Char('j') => form.focus_next(),
        KeyCode::Char('k') => form.focus_previous(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char(c) => form.input_char(c),
        _ => {}
    }
}

fn handle_preview_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.start_quiz(),
        KeyCode::Esc => app.back(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Char(' ') => app.select_at_cursor(),
        KeyCode::Char(c @ 'a'..='d') => app.select_option(c as usize - 'a' as usize),
        KeyCode::Char(c @ '1'..='4') => app.select_option(c as usize - '1' as usize),
        KeyCode::Enter => {
            app.select_at_cursor();
            app.next_question();
        }
        KeyCode::Right | KeyCode::Char('n') => app.next_question(),
        KeyCode::Char('s') => app.submit_quiz(),
        KeyCode::Left | KeyCode::Char('p') => app.previous_question(),
        KeyCode::Esc => app.back(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_review_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_review_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.toggle_review(),
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => app.start_over(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn test_app() -> App {
        let (tx, _rx) = event::channel();
        let generator = QuizGenerator::offline(QuestionBank::builtin(), Duration::ZERO);
        App::new(generator, tx)
    }

    #[test]
    fn test_build_generator_offline_with_bank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        fs::write(
            &path,
            r#"{"rust": [{"question": "Which keyword declares a constant?",
                "options": ["let", "const", "static", "mut"],
                "correctAnswer": 1}]}"#,
        )
        .unwrap();

        let config = Config {
            offline: true,
            question_bank: Some(path),
            ..Config::default()
        };
        let generator = build_generator(&config).unwrap();
        assert!(generator.bank().has_topic("rust"));
        assert!(generator.bank().has_topic("javascript"));
    }

    #[test]
    fn test_build_generator_reports_missing_bank() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            offline: true,
            question_bank: Some(dir.path().join("missing.json")),
            ..Config::default()
        };
        assert!(matches!(build_generator(&config), Err(QuizError::Load(_))));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::Generator(_)));

        handle_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_into_topic_field() {
        let mut app = test_app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);

        for c in "quiz".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(!app.should_quit);
        let Screen::Generator(screen) = &app.screen else {
            panic!("expected generator");
        };
        assert_eq!(screen.form.topic, "quiz");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_walks_back_home() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.screen, Screen::Home { selected: 1 }));
    }
}
