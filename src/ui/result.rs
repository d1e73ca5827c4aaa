use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::ResultsScreen;
use crate::models::{AnswerMap, Quiz, QuizResults};
use crate::review::{self, Pick, QuestionReview};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, screen: &ResultsScreen) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &screen.results, &screen.quiz.title);

    let reviews = review::review(&screen.quiz, &screen.answers);
    if screen.review_open {
        render_review(frame, chunks[2], &reviews, screen.scroll);
    } else {
        render_question_breakdown(frame, chunks[2], &reviews);
    }

    let hints = if screen.review_open {
        "j/k scroll  ·  r hide review  ·  n new quiz  ·  q quit"
    } else {
        "r review answers  ·  n new quiz  ·  q quit"
    };
    super::render_controls(frame, chunks[3], hints);
}

fn render_score_summary(frame: &mut Frame, area: Rect, results: &QuizResults, title: &str) {
    let grade_color = super::band_color(results.band());
    let (verdict, verdict_color) = if results.passed {
        ("PASSED", Color::Green)
    } else {
        ("FAILED", Color::Red)
    };

    let content = vec![
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(title.fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", results.percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(results.message().fg(grade_color)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} correct", results.correct),
                Style::default().fg(Color::Green),
            ),
            Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} incorrect", results.incorrect()),
                Style::default().fg(Color::Red),
            ),
            Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled(verdict, Style::default().fg(verdict_color).bold()),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn mark(review: &QuestionReview) -> (&'static str, Color) {
    if review.is_correct {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    }
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, reviews: &[QuestionReview]) {
    let lines: Vec<Line> = reviews
        .iter()
        .map(|review| {
            let (symbol, color) = mark(review);
            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", review.number),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&review.question.text),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

/// Number of lines in the full review, before wrapping.
pub(crate) fn review_line_count(quiz: &Quiz, answers: &AnswerMap) -> usize {
    review_lines(&review::review(quiz, answers)).len()
}

fn render_review(frame: &mut Frame, area: Rect, reviews: &[QuestionReview], scroll: u16) {
    let widget = Paragraph::new(review_lines(reviews))
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll, 0));
    frame.render_widget(widget, area);
}

fn review_lines<'a>(reviews: &[QuestionReview<'a>]) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = Vec::new();

    for review in reviews {
        let (symbol, color) = mark(review);
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", symbol), Style::default().fg(color).bold()),
            Span::styled(
                format!("{}. {}", review.number, review.question.text),
                Style::default().fg(Color::White).bold(),
            ),
        ]));

        for option in &review.options {
            let (suffix, style) = match (option.pick, option.is_correct_answer) {
                (Some(Pick::Correct), _) => ("  ✓ your answer", Style::default().fg(Color::Green).bold()),
                (Some(Pick::Wrong), _) => ("  ✗ your answer", Style::default().fg(Color::Red).bold()),
                (None, true) => ("  ✓ correct", Style::default().fg(Color::Green)),
                (None, false) => ("", Style::default().fg(Color::Gray)),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("   {}. {}", option.label, option.text), style),
                Span::styled(suffix, style),
            ]));
        }

        if review.user_answer.is_none() {
            lines.push(Line::from("   Not answered".fg(Color::Yellow)));
        }
        if let Some(explanation) = review.question.explanation.as_deref() {
            lines.push(Line::from(vec![
                Span::styled("   Explanation: ", Style::default().fg(Color::Cyan)),
                Span::styled(explanation, Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
