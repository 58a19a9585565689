//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to control activations.

use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::wizard::Control;

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('c') | KeyCode::Char('x') | KeyCode::Esc => {
            app.activate(Control::Close);
        }
        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => {
            app.activate(Control::Next);
        }
        KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => {
            app.activate(Control::Previous);
        }

        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_focused();
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle a mouse event: left clicks activate the control under the cursor
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(());
    }

    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    if let Some(control) = app.control_areas.hit_test(mouse.column, mouse.row) {
        app.clear_status();
        app.focused_control = control;
        app.activate(control);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::wizard::{MessageList, StepWizard};
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn wizard() -> StepWizard {
        StepWizard::new(MessageList::new(["one", "two", "three"]).unwrap())
    }

    #[test]
    fn test_navigation_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);

        handle_event(&mut app, key(KeyCode::Right)).unwrap();
        handle_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.wizard.step(), 3);

        handle_event(&mut app, key(KeyCode::Left)).unwrap();
        assert_eq!(app.wizard.step(), 2);
    }

    #[test]
    fn test_close_key_toggles() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.wizard.is_open());

        // Navigation is not available while closed
        handle_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.wizard.step(), 1);

        handle_event(&mut app, key(KeyCode::Char('c'))).unwrap();
        assert!(app.wizard.is_open());
    }

    #[test]
    fn test_enter_activates_focus() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);

        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.wizard.step(), 2);

        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focused_control, Control::Close);
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(!app.wizard.is_open());
    }

    #[test]
    fn test_help_dialog_swallows_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);

        handle_event(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert!(app.has_dialog());

        handle_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.wizard.step(), 1);

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.has_dialog());
        assert!(app.wizard.is_open());
    }

    #[test]
    fn test_quit_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);
        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);

        let mut app = App::new(&settings, wizard(), None);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(ctrl_c)).unwrap();
        assert!(app.should_quit);
        assert!(app.wizard.is_open());
    }

    #[test]
    fn test_key_release_ignored() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);
        let release = KeyEvent {
            code: KeyCode::Char('n'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_event(&mut app, Event::Key(release)).unwrap();
        assert_eq!(app.wizard.step(), 1);
    }

    #[test]
    fn test_click_activates_control() {
        let settings = Settings::default();
        let mut app = App::new(&settings, wizard(), None);
        app.control_areas.record(Control::Next, Rect::new(40, 10, 14, 3));
        app.control_areas.record(Control::Close, Rect::new(75, 0, 5, 1));

        handle_event(&mut app, click(45, 11)).unwrap();
        assert_eq!(app.wizard.step(), 2);

        handle_event(&mut app, click(0, 0)).unwrap();
        assert_eq!(app.wizard.step(), 2);

        handle_event(&mut app, click(77, 0)).unwrap();
        assert!(!app.wizard.is_open());
        assert_eq!(app.focused_control, Control::Close);
    }
}
