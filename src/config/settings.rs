//! User settings for StepWizard
//!
//! Holds the message list (inline or from a file), initial visibility,
//! journal preference and the TUI tick rate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::WizardPaths;
use crate::error::{WizardError, WizardResult};
use crate::wizard::{MessageList, DEFAULT_MESSAGES};

/// User settings for StepWizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Inline step messages
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,

    /// YAML/JSON file with step messages; wins over `messages`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_file: Option<PathBuf>,

    /// Whether the panel starts open
    #[serde(default = "default_true")]
    pub start_open: bool,

    /// Whether activations are appended to the journal
    #[serde(default)]
    pub journal_enabled: bool,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_messages() -> Vec<String> {
    DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            messages: default_messages(),
            messages_file: None,
            start_open: default_true(),
            journal_enabled: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &WizardPaths) -> Result<Self, WizardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                WizardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WizardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WizardPaths) -> Result<(), WizardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            WizardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            WizardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the effective message list
    ///
    /// Order: `override_file`, then `messages_file`, then inline `messages`.
    /// A relative `messages_file` is resolved against the settings directory.
    pub fn message_list(
        &self,
        paths: &WizardPaths,
        override_file: Option<&Path>,
    ) -> WizardResult<MessageList> {
        if let Some(file) = override_file {
            return MessageList::load(file);
        }

        if let Some(file) = &self.messages_file {
            let resolved = if file.is_relative() {
                paths.base_dir().join(file)
            } else {
                file.clone()
            };
            return MessageList::load(&resolved);
        }

        MessageList::new(self.messages.iter().cloned()).map_err(|_| {
            WizardError::Config("Settings contain an empty message list".into())
        })
    }

    /// Tick interval for the TUI event loop
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms.max(10))
    }
}
