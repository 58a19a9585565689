//! The fixed message list shown by the wizard
//!
//! A `MessageList` is never empty, so every wizard has at least one step.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WizardError, WizardResult};

/// Messages shipped with the wizard when nothing else is configured
pub const DEFAULT_MESSAGES: [&str; 3] = [
    "Learn Rust 🦀",
    "Apply for jobs 💼",
    "Invest your new income 🤑",
];

/// Ordered, immutable, non-empty list of step messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageList {
    messages: Vec<String>,
}

/// Accepted shapes for a message file
#[derive(Deserialize)]
#[serde(untagged)]
enum MessageFile {
    List(Vec<String>),
    Document { messages: Vec<String> },
}

impl MessageList {
    /// Create a message list, rejecting an empty one
    pub fn new<I, S>(messages: I) -> WizardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            return Err(WizardError::Validation(
                "Message list must contain at least one message".into(),
            ));
        }
        Ok(Self { messages })
    }

    /// Load a message list from a YAML or JSON file
    ///
    /// The file holds either a plain sequence of strings or a mapping with a
    /// `messages` key. Files ending in `.json` are parsed as JSON, everything
    /// else as YAML (which also accepts JSON documents).
    pub fn load(path: &Path) -> WizardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WizardError::Io(format!(
                "Failed to read message file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file: MessageFile = if is_json {
            serde_json::from_str(&contents)?
        } else {
            serde_yaml::from_str(&contents)?
        };

        match file {
            MessageFile::List(messages) | MessageFile::Document { messages } => {
                Self::new(messages)
            }
        }
    }

    /// Number of steps (N)
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Message for a 1-based step, `None` outside `1..=N`
    pub fn get(&self, step: usize) -> Option<&str> {
        step.checked_sub(1)
            .and_then(|index| self.messages.get(index))
            .map(String::as_str)
    }

    /// Iterate over `(step, message)` pairs, steps starting at 1
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.messages
            .iter()
            .enumerate()
            .map(|(index, message)| (index + 1, message.as_str()))
    }

    /// Borrow the raw messages
    pub fn as_slice(&self) -> &[String] {
        &self.messages
    }
}

impl Default for MessageList {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
        }
    }
}
