//! Wizard state and the step transitions
//!
//! Steps are 1-based. Transitions clamp at both ends instead of failing, so
//! `1 <= step <= total` holds after any sequence of moves.

use serde::{Deserialize, Serialize};

/// The two pieces of state owned by a wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    /// Current step, 1-based
    pub step: usize,
    /// Whether the panel is visible
    pub is_open: bool,
}

impl WizardState {
    /// State at mount time: first step, panel open
    pub fn initial() -> Self {
        Self {
            step: 1,
            is_open: true,
        }
    }

    /// Move one step forward, stopping at `total`
    ///
    /// Returns true if the step changed.
    pub fn advance(&mut self, total: usize) -> bool {
        let next = (self.step + 1).min(total.max(1));
        let changed = next != self.step;
        self.step = next;
        changed
    }

    /// Move one step back, stopping at 1
    ///
    /// Returns true if the step changed.
    pub fn retreat(&mut self) -> bool {
        let previous = self.step.saturating_sub(1).max(1);
        let changed = previous != self.step;
        self.step = previous;
        changed
    }

    /// Flip panel visibility
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Whether this is the first step
    pub fn is_first(&self) -> bool {
        self.step <= 1
    }

    /// Whether this is the last of `total` steps
    pub fn is_last(&self, total: usize) -> bool {
        self.step >= total
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::initial()
    }
}

/// The three user-activated controls on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    /// Show/hide toggle, always visible
    Close,
    /// Go back one step
    Previous,
    /// Go forward one step
    Next,
}

impl Control {
    /// All controls, in focus order
    pub const ALL: [Control; 3] = [Control::Previous, Control::Next, Control::Close];

    /// Parse a control name as typed on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "close" | "toggle" | "c" | "x" => Some(Self::Close),
            "previous" | "prev" | "back" | "p" => Some(Self::Previous),
            "next" | "n" => Some(Self::Next),
            _ => None,
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Close => "×",
            Self::Previous => "Previous",
            Self::Next => "Next",
        }
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Control::Close => write!(f, "close"),
            Control::Previous => write!(f, "previous"),
            Control::Next => write!(f, "next"),
        }
    }
}

impl std::str::FromStr for Control {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid control: '{}'. Valid controls: next, prev, close",
                s
            )
        })
    }
}

/// Result of activating a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The control that was activated
    pub control: Control,
    /// State before the activation
    pub before: WizardState,
    /// State after the activation
    pub after: WizardState,
}

impl Transition {
    /// Whether the activation changed anything
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}
