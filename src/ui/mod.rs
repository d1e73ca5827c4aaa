mod generator;
mod home;
mod quiz;
mod result;

pub(crate) use result::review_line_count;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};
use crate::models::ScoreBand;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.screen {
        Screen::Home { selected } => home::render(frame, area, *selected),
        Screen::Generator(screen) => generator::render(frame, area, screen),
        Screen::Quiz(screen) => quiz::render(frame, area, screen),
        Screen::Results(screen) => result::render(frame, area, screen),
    }
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Cyan,
        ScoreBand::Average => Color::Yellow,
        ScoreBand::Poor => Color::Red,
    }
}

fn render_controls(frame: &mut Frame, area: Rect, hints: &str) {
    let widget = Paragraph::new(hints.to_string())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::ResultsScreen;
    use crate::data::QuestionBank;
    use crate::event;
    use crate::generator::QuizGenerator;
    use crate::models::{AnswerMap, Difficulty, Question, Quiz, QuizResults};

    fn test_app() -> App {
        let (tx, _rx) = event::channel();
        let generator = QuizGenerator::offline(QuestionBank::builtin(), Duration::ZERO);
        App::new(generator, tx)
    }

    fn question(id: u32, text: &str, explanation: Option<&str>) -> Question {
        Question {
            id,
            text: text.to_string(),
            options: ["alpha", "beta", "gamma", "delta"].map(String::from),
            correct_answer: 1,
            explanation: explanation.map(String::from),
        }
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_home_and_generator_render() {
        let mut app = test_app();

        let home = screen_text(&app);
        assert!(home.contains("QUIZGEN"));
        assert!(home.contains("History"));

        app.select_next_category();
        app.choose_category();
        let form = screen_text(&app);
        assert!(form.contains("Python Quiz"));
        assert!(form.contains("ENTER to generate"));
    }

    #[test]
    fn test_results_review_render() {
        let quiz = Quiz {
            title: "Greek Quiz".to_string(),
            difficulty: Difficulty::Easy,
            timer_seconds: 0,
            questions: vec![
                question(1, "First letter?", Some("Alpha comes first.")),
                question(2, "Second letter?", None),
                question(3, "Third letter?", None),
            ],
        };
        let mut answers = AnswerMap::new();
        answers.record(1, 1);
        answers.record(2, 3);
        let results = QuizResults::compute(&quiz, &answers);

        let mut app = test_app();
        app.screen = Screen::Results(ResultsScreen {
            quiz,
            answers,
            results,
            review_open: true,
            scroll: 0,
        });

        let text = screen_text(&app);
        assert!(text.contains("33%"));
        assert!(text.contains("FAILED"));
        assert!(text.contains("Alpha comes first."));
        assert!(text.contains("✓ your answer"));
        assert!(text.contains("✗ your answer"));
        assert!(text.contains("Not answered"));
    }
}
