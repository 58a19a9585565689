//! The step wizard component
//!
//! A panel that shows one message per step, with Previous/Next navigation
//! and a close toggle.
//!
//! # Example
//!
//! ```rust
//! use stepwizard::wizard::{Control, MessageList, StepWizard};
//!
//! let messages = MessageList::new(["Plan", "Build", "Ship"]).unwrap();
//! let mut wizard = StepWizard::new(messages);
//!
//! wizard.activate(Control::Next);
//! assert_eq!(wizard.current_message(), "Build");
//!
//! let description = wizard.describe();
//! assert_eq!(description.active_flags(), vec![true, true, false]);
//! ```

pub mod messages;
pub mod render;
pub mod state;
pub mod step_wizard;

pub use messages::{MessageList, DEFAULT_MESSAGES};
pub use render::{ButtonView, PanelView, RenderDescription, StepIndicator};
pub use state::{Control, Transition, WizardState};
pub use step_wizard::StepWizard;
