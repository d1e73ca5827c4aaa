use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::GeneratorScreen;
use crate::generator::{FormField, NumberField, QuizForm};
use crate::models::Difficulty;

pub fn render(frame: &mut Frame, area: Rect, screen: &GeneratorScreen) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(11),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_heading(frame, chunks[0], screen);
    render_form(frame, chunks[1], &screen.form, !screen.is_generating());
    render_status(frame, chunks[2], screen);

    let hints = if screen.is_generating() {
        "esc cancel  ·  ctrl-c quit"
    } else {
        "tab next field  ·  h/l change  ·  enter generate  ·  esc back"
    };
    super::render_controls(frame, chunks[4], hints);
}

fn render_heading(frame: &mut Frame, area: Rect, screen: &GeneratorScreen) {
    let topic = screen.form.topic.trim();
    let title = if screen.category.is_custom() && !topic.is_empty() {
        format!("{} Quiz", topic)
    } else {
        format!("{} Quiz", screen.category.name)
    };

    let content = vec![
        Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
        Line::from("Configure your quiz".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_form(frame: &mut Frame, area: Rect, form: &QuizForm, editable: bool) {
    let focus = editable.then_some(form.focus());

    let lines = vec![
        field_label("Topic", focus == Some(FormField::Topic)),
        topic_line(&form.topic, focus == Some(FormField::Topic)),
        Line::from(""),
        field_label("Difficulty", focus == Some(FormField::Difficulty)),
        difficulty_line(form.difficulty),
        Line::from(""),
        field_label("Questions", focus == Some(FormField::QuestionCount)),
        number_line(&form.question_count, |value| value.to_string()),
        Line::from(""),
        field_label("Timer per question", focus == Some(FormField::Timer)),
        number_line(&form.timer, |value| match value {
            0 => "off".to_string(),
            secs => format!("{}s", secs),
        }),
    ];

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}

fn field_label(label: &str, focused: bool) -> Line<'static> {
    let (marker, style) = if focused {
        ("> ", Style::default().fg(Color::Cyan).bold())
    } else {
        ("  ", Style::default().fg(Color::White))
    };
    Line::from(Span::styled(format!("{}{}", marker, label), style))
}

fn topic_line(topic: &str, focused: bool) -> Line<'_> {
    let mut spans = vec![Span::raw("    ")];
    if topic.is_empty() {
        spans.push(Span::styled("any topic", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(topic, Style::default().fg(Color::Yellow)));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn difficulty_line(current: Difficulty) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    for difficulty in Difficulty::ALL {
        spans.push(choice_span(difficulty.label().to_string(), difficulty == current));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn number_line(field: &NumberField, format: impl Fn(u32) -> String) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    for (index, preset) in field.presets().iter().enumerate() {
        spans.push(choice_span(format(*preset), field.choice() == index));
        spans.push(Span::raw("  "));
    }

    let custom = if field.is_custom() {
        format!("custom: {}_", field.custom_input())
    } else {
        "custom".to_string()
    };
    spans.push(choice_span(custom, field.is_custom()));

    if field.is_custom() && !field.is_valid() {
        let (min, max) = field.bounds();
        spans.push(Span::styled(
            format!("  enter {}-{}", min, max),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

fn choice_span(text: String, chosen: bool) -> Span<'static> {
    if chosen {
        Span::styled(format!("[{}]", text), Style::default().fg(Color::Cyan).bold())
    } else {
        Span::styled(format!(" {} ", text), Style::default().fg(Color::Gray))
    }
}

fn render_status(frame: &mut Frame, area: Rect, screen: &GeneratorScreen) {
    let line = if screen.is_generating() {
        Line::from(Span::styled(
            "Generating quiz...",
            Style::default().fg(Color::Yellow).bold(),
        ))
    } else if screen.can_generate() {
        Line::from(Span::styled(
            "ENTER to generate",
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from("Fix the highlighted fields to continue".fg(Color::Red))
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
