//! Journal entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wizard::{Control, Transition};

/// A single control activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the activation happened (UTC)
    pub timestamp: DateTime<Utc>,

    /// Control that was activated
    pub control: Control,

    /// Step before the activation
    pub step_before: usize,

    /// Step after the activation
    pub step_after: usize,

    /// Panel visibility before the activation
    pub open_before: bool,

    /// Panel visibility after the activation
    pub open_after: bool,
}

impl JournalEntry {
    /// Record a transition as of now
    pub fn from_transition(transition: &Transition) -> Self {
        Self {
            timestamp: Utc::now(),
            control: transition.control,
            step_before: transition.before.step,
            step_after: transition.after.step,
            open_before: transition.before.is_open,
            open_after: transition.after.is_open,
        }
    }

    /// Whether the activation changed any state
    pub fn changed(&self) -> bool {
        self.step_before != self.step_after || self.open_before != self.open_after
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {:<8} step {} -> {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.control.to_string().to_uppercase(),
            self.step_before,
            self.step_after,
        );

        if self.open_before != self.open_after {
            output.push_str(if self.open_after { " (opened)" } else { " (closed)" });
        } else if !self.changed() {
            output.push_str(" (no change)");
        }

        output
    }
}
