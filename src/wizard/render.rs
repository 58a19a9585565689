//! Render description handed to the host toolkit
//!
//! The description says what to show, never how. A closed panel carries no
//! `panel` section at all, only the close control.

use serde::Serialize;

use super::state::Control;

/// A button the host should draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    /// Which control this button activates
    pub control: Control,
    /// Button label
    pub label: &'static str,
    /// Whether activation is currently pointless
    pub disabled: bool,
}

/// One numbered step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    /// 1-based step number
    pub number: usize,
    /// Marked when `number <= step`
    pub active: bool,
}

/// Contents of an open panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    /// Current step, 1-based
    pub step: usize,
    /// Total number of steps
    pub total: usize,
    /// One indicator per step
    pub indicators: Vec<StepIndicator>,
    /// Message for the current step
    pub message: String,
    /// The "Previous" button
    pub previous: ButtonView,
    /// The "Next" button
    pub next: ButtonView,
}

/// Everything the host needs to draw the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderDescription {
    /// Whether the panel is visible
    pub is_open: bool,
    /// The close control, shown in every state
    pub close: ButtonView,
    /// Panel contents, present only while open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelView>,
}

impl RenderDescription {
    /// Per-step active flags, empty while closed
    pub fn active_flags(&self) -> Vec<bool> {
        self.panel
            .as_ref()
            .map(|panel| panel.indicators.iter().map(|i| i.active).collect())
            .unwrap_or_default()
    }

    /// Current message, `None` while closed
    pub fn message(&self) -> Option<&str> {
        self.panel.as_ref().map(|panel| panel.message.as_str())
    }

    /// Buttons that are currently on screen, in focus order
    pub fn visible_controls(&self) -> Vec<Control> {
        match &self.panel {
            Some(_) => Control::ALL.to_vec(),
            None => vec![Control::Close],
        }
    }

    /// Whether a control is on screen and enabled
    pub fn is_enabled(&self, control: Control) -> bool {
        match (control, &self.panel) {
            (Control::Close, _) => !self.close.disabled,
            (Control::Previous, Some(panel)) => !panel.previous.disabled,
            (Control::Next, Some(panel)) => !panel.next.disabled,
            (_, None) => false,
        }
    }
}
