//! Wizard panel view
//!
//! Draws a `RenderDescription`: the close control always, and while open the
//! step indicators, current message and the Previous/Next buttons. Every
//! drawn control has its area recorded for mouse hit-testing.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::{centered_rect_fixed, PanelLayout};
use crate::wizard::{ButtonView, Control, PanelView};

const PANEL_WIDTH: u16 = 60;
const PANEL_HEIGHT: u16 = 12;
const ACCENT: Color = Color::Magenta;

/// Render the close control and, if open, the panel
pub fn render(frame: &mut Frame, app: &mut App, main: Rect, close_area: Rect) {
    let description = app.wizard.describe();

    render_close_button(frame, app, &description.close, close_area);

    if let Some(panel) = &description.panel {
        let area = centered_rect_fixed(PANEL_WIDTH, PANEL_HEIGHT, main);
        render_panel(frame, app, panel, area);
    }
}

fn render_close_button(frame: &mut Frame, app: &mut App, button: &ButtonView, area: Rect) {
    let focused = app.focused_control == Control::Close;
    let style = if focused {
        Style::default().fg(Color::Black).bg(ACCENT)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!("[{}]", button.label),
        style,
    )))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
    app.control_areas.record(Control::Close, area);
}

fn render_panel(frame: &mut Frame, app: &mut App, panel: &PanelView, area: Rect) {
    let block = Block::default()
        .title(format!(" Step {} of {} ", panel.step, panel.total))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = PanelLayout::new(inner);

    // Indicators
    let mut spans = Vec::with_capacity(panel.indicators.len() * 2);
    for indicator in &panel.indicators {
        let style = if indicator.active {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).bg(Color::Black)
        };
        spans.push(Span::styled(format!(" {} ", indicator.number), style));
        spans.push(Span::raw("   "));
    }
    spans.pop();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        layout.indicators,
    );

    // Message
    let message = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Step {}: ", panel.step),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(panel.message.as_str()),
    ]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(message, layout.message);

    render_nav_button(frame, app, &panel.previous, layout.previous);
    render_nav_button(frame, app, &panel.next, layout.next);
}

fn render_nav_button(frame: &mut Frame, app: &mut App, button: &ButtonView, area: Rect) {
    let focused = app.focused_control == button.control && !button.disabled;

    let (text_style, border_style) = if button.disabled {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else if focused {
        (
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(ACCENT),
        )
    } else {
        (Style::default().fg(Color::White), Style::default().fg(ACCENT))
    };

    let paragraph = Paragraph::new(Span::styled(button.label, text_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(paragraph, area);
    app.control_areas.record(button.control, area);
}
