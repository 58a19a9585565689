//! Application state for the TUI
//!
//! The App owns the wizard and everything the host needs around it: focus,
//! the help overlay, the status line and the clickable areas from the last
//! draw.

use ratatui::layout::Rect;

use crate::config::settings::Settings;
use crate::journal::{JournalEntry, JournalLogger};
use crate::wizard::{Control, StepWizard, Transition};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Screen areas of the controls drawn in the last frame
#[derive(Debug, Clone, Default)]
pub struct ControlAreas {
    areas: Vec<(Control, Rect)>,
}

impl ControlAreas {
    /// Forget all areas before a redraw
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Record where a control was drawn
    pub fn record(&mut self, control: Control, area: Rect) {
        self.areas.push((control, area));
    }

    /// Control drawn at the given cell, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Control> {
        self.areas
            .iter()
            .rev()
            .find(|(_, area)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(control, _)| *control)
    }
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The wizard being hosted
    pub wizard: StepWizard,

    /// Journal, when enabled in settings
    pub journal: Option<JournalLogger>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Control that Enter/Space activates
    pub focused_control: Control,

    /// Status message to display
    pub status_message: Option<String>,

    /// Clickable control areas from the last draw
    pub control_areas: ControlAreas,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, wizard: StepWizard, journal: Option<JournalLogger>) -> Self {
        let mut app = Self {
            settings,
            wizard,
            journal,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            focused_control: Control::Next,
            status_message: None,
            control_areas: ControlAreas::default(),
        };
        app.fix_focus();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Activate a control, journal it and keep focus on something usable
    pub fn activate(&mut self, control: Control) -> Transition {
        let transition = self.wizard.activate(control);

        if let Some(journal) = &self.journal {
            if let Err(e) = journal.log(&JournalEntry::from_transition(&transition)) {
                self.set_status(format!("Journal write failed: {}", e));
            }
        }

        self.fix_focus();
        transition
    }

    /// Activate whatever has focus
    pub fn activate_focused(&mut self) -> Transition {
        self.activate(self.focused_control)
    }

    /// Enabled controls in focus order
    pub fn focusable_controls(&self) -> Vec<Control> {
        let description = self.wizard.describe();
        description
            .visible_controls()
            .into_iter()
            .filter(|c| description.is_enabled(*c))
            .collect()
    }

    /// Move focus to the next enabled control
    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    /// Move focus to the previous enabled control
    pub fn focus_previous(&mut self) {
        self.cycle_focus(-1);
    }

    fn cycle_focus(&mut self, offset: isize) {
        let controls = self.focusable_controls();
        if controls.is_empty() {
            return;
        }
        let len = controls.len() as isize;
        let current = controls
            .iter()
            .position(|c| *c == self.focused_control)
            .map_or(0, |i| i as isize);
        let next = (current + offset).rem_euclid(len) as usize;
        self.focused_control = controls[next];
    }

    /// Move focus off controls that are hidden or disabled
    fn fix_focus(&mut self) {
        let controls = self.focusable_controls();
        if controls.contains(&self.focused_control) {
            return;
        }
        let preferred = match self.focused_control {
            Control::Next => Control::Previous,
            Control::Previous => Control::Next,
            Control::Close => Control::Next,
        };
        self.focused_control = if controls.contains(&preferred) {
            preferred
        } else {
            Control::Close
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::MessageList;
    use tempfile::TempDir;

    fn wizard() -> StepWizard {
        StepWizard::new(MessageList::new(["one", "two", "three"]).unwrap())
    }

    #[test]
    fn test_initial_focus_is_next() {
        let settings = Settings::default();
        let app = App::new(&settings, wizard(), None);
        assert_eq!(app.focused_control, Control::Next);
        assert_eq!(app.focusable_controls(), vec![Control::Next, Control::Close]);
    }

    #[test]
    fn test_focus_moves_off_disabled_next() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);
        app.activate_focused();
        app.activate_focused();
        assert_eq!(app.wizard.step(), 3);
        assert_eq!(app.focused_control, Control::Previous);
    }

    #[test]
    fn test_focus_falls_back_to_close_when_closed() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);
        app.activate(Control::Close);
        assert!(!app.wizard.is_open());
        assert_eq!(app.focused_control, Control::Close);

        app.focus_next();
        assert_eq!(app.focused_control, Control::Close);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);
        app.activate(Control::Next);
        assert_eq!(
            app.focusable_controls(),
            vec![Control::Previous, Control::Next, Control::Close]
        );

        app.focused_control = Control::Previous;
        app.focus_next();
        assert_eq!(app.focused_control, Control::Next);
        app.focus_previous();
        app.focus_previous();
        assert_eq!(app.focused_control, Control::Close);
    }

    #[test]
    fn test_activation_is_journaled() {
        let temp_dir = TempDir::new().unwrap();
        let journal = JournalLogger::new(temp_dir.path().join("journal.log"));
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), Some(journal.clone()));

        app.activate(Control::Next);
        app.activate(Control::Close);

        let entries = journal.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].control, Control::Close);
    }

    #[test]
    fn test_journal_failure_sets_status() {
        let temp_dir = TempDir::new().unwrap();
        let journal = JournalLogger::new(temp_dir.path().join("missing").join("journal.log"));
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), Some(journal));

        app.activate(Control::Next);
        assert_eq!(app.wizard.step(), 2);
        assert!(app.status_message.unwrap().starts_with("Journal write failed"));
    }

    #[test]
    fn test_hit_test() {
        let mut areas = ControlAreas::default();
        areas.record(Control::Previous, Rect::new(0, 10, 14, 3));
        areas.record(Control::Close, Rect::new(75, 0, 5, 1));

        assert_eq!(areas.hit_test(5, 11), Some(Control::Previous));
        assert_eq!(areas.hit_test(79, 0), Some(Control::Close));
        assert_eq!(areas.hit_test(14, 11), None);
        assert_eq!(areas.hit_test(76, 1), None);

        areas.clear();
        assert_eq!(areas.hit_test(5, 11), None);
    }
}
