//! StepWizard - a step-by-step message panel for the terminal
//!
//! The core is a small state machine: a fixed list of messages, a 1-based
//! current step that clamps at both ends, and a visibility flag. Hosts
//! deliver control activations and redraw from the render description.
//!
//! # Architecture
//!
//! - `wizard`: the component (messages, state, transitions, render description)
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `journal`: append-only activity log
//! - `display`: plain-text formatting for CLI output
//! - `cli`: command handlers
//! - `tui`: interactive terminal host
//!
//! # Example
//!
//! ```rust
//! use stepwizard::wizard::{MessageList, StepWizard};
//!
//! let mut wizard = StepWizard::new(MessageList::default());
//! wizard.advance();
//! wizard.advance();
//! wizard.advance();
//! assert_eq!(wizard.step(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod journal;
pub mod tui;
pub mod wizard;

pub use error::{WizardError, WizardResult};
pub use wizard::StepWizard;
