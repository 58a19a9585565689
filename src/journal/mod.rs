//! Activity journal for StepWizard
//!
//! Records every control activation with the state before and after, in an
//! append-only line-delimited JSON file (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use stepwizard::journal::{JournalEntry, JournalLogger};
//!
//! let logger = JournalLogger::new(paths.journal_file());
//! let transition = wizard.activate(Control::Next);
//! logger.log(&JournalEntry::from_transition(&transition))?;
//! ```

mod entry;
mod logger;

pub use entry::JournalEntry;
pub use logger::JournalLogger;
