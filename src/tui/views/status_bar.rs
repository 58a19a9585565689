//! Status bar view
//!
//! Shows the current step, panel visibility, status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    spans.push(Span::styled(" Step: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        format!("{}/{}", app.wizard.step(), app.wizard.total_steps()),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    let (label, color) = if app.wizard.is_open() {
        ("open", Color::Green)
    } else {
        ("closed", Color::DarkGray)
    };
    spans.push(Span::styled(label, Style::default().fg(color)));

    if app.settings.journal_enabled {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("journal", Style::default().fg(Color::Cyan)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " ←/→:Step  c:Close  q:Quit  ?:Help ";

    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
