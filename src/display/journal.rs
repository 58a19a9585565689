//! Journal formatting

use crate::journal::JournalEntry;

/// Format journal entries, one per line
pub fn format_journal(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No journal entries found.".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Control, StepWizard};

    #[test]
    fn test_empty() {
        assert_eq!(format_journal(&[]), "No journal entries found.");
    }

    #[test]
    fn test_one_line_per_entry() {
        let mut wizard = StepWizard::default();
        let entries: Vec<_> = wizard
            .replay([Control::Next, Control::Close])
            .iter()
            .map(JournalEntry::from_transition)
            .collect();

        let text = format_journal(&entries);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("NEXT"));
    }
}
