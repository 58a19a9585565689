//! TUI Dialogs module
//!
//! Overlays drawn on top of the wizard panel.

pub mod help;
