//! Keybinding definitions
//!
//! Single source for the help overlay and the status bar hints.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active while the wizard panel is open
    Panel,
    /// Active in the help overlay
    Help,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('?'),
        modifiers: KeyModifiers::NONE,
        description: "Help",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::NONE,
        description: "Close/open panel",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Focus next control",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Activate focused control",
        context: KeyContext::Global,
    },
    // Panel
    Keybinding {
        key: KeyCode::Char('n'),
        modifiers: KeyModifiers::NONE,
        description: "Next step",
        context: KeyContext::Panel,
    },
    Keybinding {
        key: KeyCode::Char('p'),
        modifiers: KeyModifiers::NONE,
        description: "Previous step",
        context: KeyContext::Panel,
    },
    Keybinding {
        key: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        description: "Next step",
        context: KeyContext::Panel,
    },
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        description: "Previous step",
        context: KeyContext::Panel,
    },
    // Help
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Close help",
        context: KeyContext::Help,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |kb| kb.context == context)
}

/// Format a keybinding for display
pub fn format_key(kb: &Keybinding) -> String {
    let key = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => "?".to_string(),
    };

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{}", key)
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contexts_are_populated() {
        assert!(get_keybindings(KeyContext::Global).count() >= 4);
        assert_eq!(get_keybindings(KeyContext::Panel).count(), 4);
        assert_eq!(get_keybindings(KeyContext::Help).count(), 1);
    }

    #[test]
    fn test_format_key() {
        let kb = &KEYBINDINGS[0];
        assert_eq!(format_key(kb), "q");

        let ctrl = Keybinding {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            description: "Quit",
            context: KeyContext::Global,
        };
        assert_eq!(format_key(&ctrl), "Ctrl+c");
    }
}
