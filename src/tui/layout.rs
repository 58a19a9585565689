//! Layout definitions for the TUI
//!
//! The screen is a main area with a one-line status bar; the wizard panel is
//! centered in the main area and the close control sits in its top-right
//! corner.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the close button, `[×]` plus padding
pub const CLOSE_BUTTON_WIDTH: u16 = 5;

/// Width of the Previous/Next buttons
pub const NAV_BUTTON_WIDTH: u16 = 14;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
    /// Close control, top-right of the main area
    pub close_button: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let main = vertical[0];
        let close_width = CLOSE_BUTTON_WIDTH.min(main.width);
        let close_button = Rect::new(
            main.x + main.width.saturating_sub(close_width),
            main.y,
            close_width,
            1.min(main.height),
        );

        Self {
            main,
            status_bar: vertical[1],
            close_button,
        }
    }
}

/// Layout inside the wizard panel
pub struct PanelLayout {
    /// Row of numbered step indicators
    pub indicators: Rect,
    /// Current message
    pub message: Rect,
    /// Previous button, left side of the button row
    pub previous: Rect,
    /// Next button, right side of the button row
    pub next: Rect,
}

impl PanelLayout {
    /// Calculate panel layout from the panel's inner area
    pub fn new(inner: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Indicators
                Constraint::Length(1), // Spacer
                Constraint::Min(1),    // Message
                Constraint::Length(3), // Buttons
            ])
            .split(inner);

        let buttons = chunks[3];
        let width = NAV_BUTTON_WIDTH.min(buttons.width / 2);
        let previous = Rect::new(buttons.x, buttons.y, width, buttons.height);
        let next = Rect::new(
            buttons.x + buttons.width.saturating_sub(width),
            buttons.y,
            width,
            buttons.height,
        );

        Self {
            indicators: chunks[0],
            message: chunks[2],
            previous,
            next,
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
