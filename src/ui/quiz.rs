use ratatui::{
    prelude::*,
    widgets::{Block, Borders, LineGauge, Paragraph, Wrap},
};

use crate::app::QuizScreen;
use crate::generator::QuizSource;
use crate::models::{Question, format_time};
use crate::review::OPTION_LABELS;
use crate::runner::QuizRunner;

pub fn render(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    match screen.runner.current_question() {
        Some(question) => render_question(frame, area, screen, question),
        None => render_preview(frame, area, screen),
    }
}

fn render_preview(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    let quiz = screen.runner.quiz();
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let timer = match quiz.total_seconds() {
        Some(total) => format!(
            "{}s per question · {} total",
            quiz.timer_seconds,
            format_time(total)
        ),
        None => "No time limit".to_string(),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            quiz.title.as_str(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!("{} Questions · {}", quiz.len(), quiz.difficulty).fg(Color::Gray)),
        Line::from(timer.fg(Color::Gray)),
        Line::from(""),
    ];
    if screen.source == QuizSource::Fallback {
        content.push(Line::from(
            "Generated from the offline question bank".fg(Color::Yellow),
        ));
    } else {
        content.push(Line::from(""));
    }
    content.extend([
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
    super::render_controls(frame, chunks[3], "enter start  ·  esc back  ·  q quit");
}

fn render_question(frame: &mut Frame, area: Rect, screen: &QuizScreen, question: &Question) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], &screen.runner);
    render_progress_bar(frame, chunks[1], &screen.runner);
    render_question_text(frame, chunks[2], &question.text);
    render_options(
        frame,
        chunks[3],
        &question.options,
        screen.cursor,
        screen.runner.current_answer(),
    );
    render_controls(frame, chunks[4], &screen.runner);
}

fn render_progress(frame: &mut Frame, area: Rect, runner: &QuizRunner) {
    let index = runner.current_index().unwrap_or(0);
    let progress = Span::styled(
        format!("Question {}/{}", index + 1, runner.quiz().len()),
        Style::default().fg(Color::DarkGray),
    );

    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);
    frame.render_widget(Paragraph::new(progress), halves[0]);

    if let Some(remaining) = runner.time_remaining() {
        let widget = Paragraph::new(format!("{} left", format_time(remaining)))
            .alignment(Alignment::Right)
            .fg(timer_color(remaining))
            .bold();
        frame.render_widget(widget, halves[1]);
    }
}

fn timer_color(remaining: u32) -> Color {
    match remaining {
        0..=5 => Color::Red,
        6..=10 => Color::Yellow,
        _ => Color::Green,
    }
}

fn render_progress_bar(frame: &mut Frame, area: Rect, runner: &QuizRunner) {
    let total = runner.quiz().len().max(1);
    let done = runner.current_index().unwrap_or(0) + 1;
    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .label("")
        .ratio(done as f64 / total as f64);
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String; 4],
    cursor: usize,
    answer: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_answer = answer == Some(index);
        let style = if is_answer {
            Style::default().fg(Color::Cyan).bold()
        } else if index == cursor {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if index == cursor { ">" } else { " " };
        let check = if is_answer { "●" } else { "○" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", check), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, runner: &QuizRunner) {
    let advance = if runner.is_last_question() {
        "enter/s submit"
    } else {
        "enter next"
    };
    let hints = if runner.can_go_back() {
        format!("j/k move  ·  a-d select  ·  {}  ·  p previous  ·  esc back", advance)
    } else {
        format!("j/k move  ·  a-d select  ·  {}  ·  esc back", advance)
    };
    super::render_controls(frame, area, &hints);
}
