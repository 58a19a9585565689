//! Non-interactive wizard commands
//!
//! `show` prints the description for a given state, `run` replays a list of
//! activations from the initial state, `messages` lists the steps.

use clap::ValueEnum;

use crate::display::{format_description, format_message_list};
use crate::error::WizardResult;
use crate::journal::{JournalEntry, JournalLogger};
use crate::wizard::{Control, MessageList, RenderDescription, StepWizard};

/// Output format for render descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text panel
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Serialize a description in the requested format
pub fn render_output(description: &RenderDescription, format: OutputFormat) -> WizardResult<String> {
    Ok(match format {
        OutputFormat::Text => format_description(description),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(description)?),
        OutputFormat::Yaml => serde_yaml::to_string(description)?,
    })
}

/// Print the description for `step` (default 1), open unless `closed`
pub fn handle_show_command(
    messages: MessageList,
    step: Option<usize>,
    closed: bool,
    format: OutputFormat,
) -> WizardResult<()> {
    let wizard = StepWizard::at_step(messages, step.unwrap_or(1))?.with_open(!closed);
    print!("{}", render_output(&wizard.describe(), format)?);
    Ok(())
}

/// Replay activations from the initial state and print the final description
///
/// Each activation is journaled when a logger is given.
pub fn handle_run_command(
    messages: MessageList,
    start_open: bool,
    controls: &[Control],
    journal: Option<&JournalLogger>,
    format: OutputFormat,
) -> WizardResult<()> {
    let mut wizard = StepWizard::new(messages).with_open(start_open);
    let transitions = wizard.replay(controls.iter().copied());

    if let Some(logger) = journal {
        let entries: Vec<JournalEntry> = transitions
            .iter()
            .map(JournalEntry::from_transition)
            .collect();
        logger.log_batch(&entries)?;
    }

    print!("{}", render_output(&wizard.describe(), format)?);
    Ok(())
}

/// List the configured messages
pub fn handle_messages_command(messages: &MessageList) -> WizardResult<()> {
    print!("{}", format_message_list(messages));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_closed_omits_panel() {
        let wizard = StepWizard::default().with_open(false);
        let json = render_output(&wizard.describe(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["is_open"], false);
        assert_eq!(value["close"]["control"], "close");
        assert!(value.get("panel").is_none());
    }

    #[test]
    fn test_render_yaml_open() {
        let wizard = StepWizard::default();
        let yaml = render_output(&wizard.describe(), OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(value["panel"]["step"].as_u64(), Some(1));
        assert_eq!(value["panel"]["previous"]["disabled"].as_bool(), Some(true));
    }

    #[test]
    fn test_show_rejects_bad_step() {
        let err = handle_show_command(MessageList::default(), Some(9), false, OutputFormat::Text)
            .unwrap_err();
        assert!(err.is_validation());
    }
}
