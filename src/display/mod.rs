//! Display formatting for CLI output
//!
//! Plain-text renderings of the wizard for non-interactive use.

pub mod description;
pub mod journal;

pub use description::{format_description, format_message_list};
pub use journal::format_journal;
