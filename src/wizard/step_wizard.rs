//! The step wizard component
//!
//! Owns the message list and the state. Hosts call the mutators (or
//! `activate`) and then `describe` to redraw.

use crate::error::{WizardError, WizardResult};

use super::messages::MessageList;
use super::render::{ButtonView, PanelView, RenderDescription, StepIndicator};
use super::state::{Control, Transition, WizardState};

/// A multi-step message panel with forward/back navigation
#[derive(Debug, Clone)]
pub struct StepWizard {
    messages: MessageList,
    state: WizardState,
}

impl StepWizard {
    /// Create a wizard at step 1 with the panel open
    pub fn new(messages: MessageList) -> Self {
        Self {
            messages,
            state: WizardState::initial(),
        }
    }

    /// Create a wizard positioned at `step`
    ///
    /// # Errors
    ///
    /// Returns a validation error if `step` is outside `1..=N`.
    pub fn at_step(messages: MessageList, step: usize) -> WizardResult<Self> {
        if step == 0 || step > messages.len() {
            return Err(WizardError::step_out_of_range(step, messages.len()));
        }
        Ok(Self {
            messages,
            state: WizardState {
                step,
                is_open: true,
            },
        })
    }

    /// Set the initial visibility (builder style)
    pub fn with_open(mut self, is_open: bool) -> Self {
        self.state.is_open = is_open;
        self
    }

    /// Current state
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Current step, 1-based
    pub fn step(&self) -> usize {
        self.state.step
    }

    /// Whether the panel is visible
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Number of steps
    pub fn total_steps(&self) -> usize {
        self.messages.len()
    }

    /// The message list
    pub fn messages(&self) -> &MessageList {
        &self.messages
    }

    /// Message for the current step
    pub fn current_message(&self) -> &str {
        // step is kept inside 1..=N, so the lookup always succeeds
        self.messages.get(self.state.step).unwrap_or_default()
    }

    /// Go to the next step; no-op on the last one
    pub fn advance(&mut self) -> bool {
        self.state.advance(self.messages.len())
    }

    /// Go to the previous step; no-op on the first one
    pub fn retreat(&mut self) -> bool {
        self.state.retreat()
    }

    /// Show or hide the panel
    pub fn toggle_open(&mut self) {
        self.state.toggle_open();
    }

    /// Deliver an activation for one of the three controls
    ///
    /// Previous/Next are not on screen while the panel is closed, so
    /// activating them then leaves the state untouched.
    pub fn activate(&mut self, control: Control) -> Transition {
        let before = self.state;
        match control {
            Control::Close => self.toggle_open(),
            Control::Previous if self.state.is_open => {
                self.retreat();
            }
            Control::Next if self.state.is_open => {
                self.advance();
            }
            Control::Previous | Control::Next => {}
        }
        Transition {
            control,
            before,
            after: self.state,
        }
    }

    /// Apply a sequence of activations in order
    pub fn replay<I>(&mut self, controls: I) -> Vec<Transition>
    where
        I: IntoIterator<Item = Control>,
    {
        controls.into_iter().map(|c| self.activate(c)).collect()
    }

    /// Build the render description for the current state
    pub fn describe(&self) -> RenderDescription {
        let total = self.messages.len();
        let step = self.state.step;

        let panel = self.state.is_open.then(|| PanelView {
            step,
            total,
            indicators: (1..=total)
                .map(|number| StepIndicator {
                    number,
                    active: number <= step,
                })
                .collect(),
            message: self.current_message().to_string(),
            previous: ButtonView {
                control: Control::Previous,
                label: Control::Previous.label(),
                disabled: self.state.is_first(),
            },
            next: ButtonView {
                control: Control::Next,
                label: Control::Next.label(),
                disabled: self.state.is_last(total),
            },
        });

        RenderDescription {
            is_open: self.state.is_open,
            close: ButtonView {
                control: Control::Close,
                label: Control::Close.label(),
                disabled: false,
            },
            panel,
        }
    }
}

impl Default for StepWizard {
    fn default() -> Self {
        Self::new(MessageList::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_step() -> StepWizard {
        StepWizard::new(MessageList::new(["one", "two", "three"]).unwrap())
    }

    #[test]
    fn test_starts_open_at_step_one() {
        let wizard = three_step();
        assert_eq!(wizard.step(), 1);
        assert!(wizard.is_open());
        assert_eq!(wizard.current_message(), "one");
    }

    #[test]
    fn test_advance_shows_second_message() {
        let mut wizard = three_step();
        assert!(wizard.advance());
        assert_eq!(wizard.step(), 2);
        assert_eq!(wizard.current_message(), "two");
        assert_eq!(wizard.describe().message(), Some("two"));
    }

    #[test]
    fn test_advance_at_last_step_stays() {
        let mut wizard = StepWizard::at_step(MessageList::new(["a", "b", "c"]).unwrap(), 3).unwrap();
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), 3);
        assert_eq!(wizard.current_message(), "c");
    }

    #[test]
    fn test_retreat_at_first_step_stays() {
        let mut wizard = three_step();
        assert!(!wizard.retreat());
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn test_toggle_hides_panel_but_keeps_close() {
        let mut wizard = three_step();
        wizard.toggle_open();

        let description = wizard.describe();
        assert!(!description.is_open);
        assert!(description.panel.is_none());
        assert_eq!(description.message(), None);
        assert!(description.active_flags().is_empty());
        assert_eq!(description.close.control, Control::Close);
        assert_eq!(description.visible_controls(), vec![Control::Close]);
        assert!(description.is_enabled(Control::Close));
    }

    #[test]
    fn test_at_step_rejects_out_of_range() {
        let messages = MessageList::new(["a", "b", "c"]).unwrap();
        assert!(StepWizard::at_step(messages.clone(), 0).is_err());
        assert!(StepWizard::at_step(messages.clone(), 4).is_err());
        assert!(StepWizard::at_step(messages, 3).is_ok());
    }

    #[test]
    fn test_step_stays_in_range_for_all_sequences() {
        // Every move sequence up to length 8, for N = 1..=5
        for total in 1..=5usize {
            let messages = MessageList::new((1..=total).map(|i| i.to_string())).unwrap();
            for length in 0..=8u32 {
                for pattern in 0..(1u32 << length) {
                    let mut wizard = StepWizard::new(messages.clone());
                    for bit in 0..length {
                        if pattern & (1 << bit) != 0 {
                            wizard.advance();
                        } else {
                            wizard.retreat();
                        }
                        assert!(wizard.step() >= 1 && wizard.step() <= total);
                        assert_eq!(wizard.current_message(), wizard.step().to_string());
                    }
                }
            }
        }
    }

    #[test]
    fn test_advance_idempotent_at_end() {
        let mut wizard = three_step();
        for _ in 0..10 {
            wizard.advance();
        }
        assert_eq!(wizard.step(), 3);
    }

    #[test]
    fn test_retreat_idempotent_at_start() {
        let mut wizard = StepWizard::at_step(MessageList::new(["a", "b", "c"]).unwrap(), 3).unwrap();
        for _ in 0..10 {
            wizard.retreat();
        }
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn test_describe_indicators_and_buttons() {
        let mut wizard = three_step();
        wizard.advance();

        let description = wizard.describe();
        assert!(description.is_open);
        assert_eq!(description.active_flags(), vec![true, true, false]);

        let panel = description.panel.as_ref().unwrap();
        assert_eq!(panel.step, 2);
        assert_eq!(panel.total, 3);
        assert!(!panel.previous.disabled);
        assert!(!panel.next.disabled);
        assert_eq!(
            description.visible_controls(),
            vec![Control::Previous, Control::Next, Control::Close]
        );
    }

    #[test]
    fn test_describe_disables_buttons_at_bounds() {
        let wizard = three_step();
        let panel = wizard.describe().panel.unwrap();
        assert!(panel.previous.disabled);
        assert!(!panel.next.disabled);

        let wizard = StepWizard::at_step(MessageList::new(["a", "b", "c"]).unwrap(), 3).unwrap();
        let description = wizard.describe();
        assert!(!description.is_enabled(Control::Next));
        assert!(description.is_enabled(Control::Previous));
    }

    #[test]
    fn test_single_message_disables_both_buttons() {
        let wizard = StepWizard::new(MessageList::new(["only"]).unwrap());
        let panel = wizard.describe().panel.unwrap();
        assert!(panel.previous.disabled);
        assert!(panel.next.disabled);
    }

    #[test]
    fn test_activate_dispatches_controls() {
        let mut wizard = three_step();

        let transition = wizard.activate(Control::Next);
        assert!(transition.changed());
        assert_eq!(transition.before.step, 1);
        assert_eq!(transition.after.step, 2);

        let transition = wizard.activate(Control::Previous);
        assert_eq!(transition.after.step, 1);

        let transition = wizard.activate(Control::Close);
        assert!(!transition.after.is_open);
    }

    #[test]
    fn test_navigation_ignored_while_closed() {
        let mut wizard = three_step().with_open(false);

        let transition = wizard.activate(Control::Next);
        assert!(!transition.changed());
        assert_eq!(wizard.step(), 1);

        wizard.activate(Control::Close);
        wizard.activate(Control::Next);
        assert_eq!(wizard.step(), 2);
    }

    #[test]
    fn test_state_survives_close_and_reopen() {
        let mut wizard = three_step();
        wizard.replay([Control::Next, Control::Next, Control::Close, Control::Close]);
        assert!(wizard.is_open());
        assert_eq!(wizard.step(), 3);
    }

    #[test]
    fn test_replay_returns_each_transition() {
        let mut wizard = three_step();
        let transitions = wizard.replay([Control::Next, Control::Next, Control::Next]);
        assert_eq!(transitions.len(), 3);
        assert!(transitions[1].changed());
        assert!(!transitions[2].changed());
    }
}
