//! Terminal User Interface module
//!
//! Hosts the step wizard in the terminal using ratatui. Clicks and keys are
//! turned into control activations; the panel is redrawn from
//! `StepWizard::describe` after every event.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
