//! Journal CLI command

use crate::display::format_journal;
use crate::error::WizardResult;
use crate::journal::JournalLogger;

/// Print the most recent `limit` journal entries
pub fn handle_journal_command(logger: &JournalLogger, limit: usize) -> WizardResult<()> {
    let entries = logger.read_recent(limit)?;
    println!("{}", format_journal(&entries).trim_end());
    Ok(())
}
