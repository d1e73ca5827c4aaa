use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::CATEGORIES;

pub fn render(frame: &mut Frame, area: Rect, selected: usize) {
    let height = CATEGORIES.len() as u16 * 2 + 7;
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZGEN",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Pick a category to build a quiz".fg(Color::DarkGray)),
        Line::from(""),
    ];

    for (index, category) in CATEGORIES.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        content.push(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(format!("{:<12}", category.name), style),
        ]));
        content.push(Line::from(category.blurb.fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
    super::render_controls(frame, chunks[3], "j/k navigate  ·  enter choose  ·  q quit");
}
