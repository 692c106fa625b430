use crate::model::row::TAB_STOP;
use crate::primitives::syntax::{SyntaxProfile, SyntaxRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editor behavior settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Extra syntax profiles. A profile with the same `filetype` as a built-in replaces it.
    #[serde(default)]
    pub languages: Vec<SyntaxProfile>,
}

/// Editor behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Columns per tab stop
    #[serde(default = "default_tab_stop")]
    pub tab_stop: usize,

    /// Extra Ctrl-Q presses needed to quit with unsaved changes
    #[serde(default = "default_quit_times")]
    pub quit_times: usize,

    /// How long a status message stays visible
    #[serde(default = "default_message_timeout_secs")]
    pub message_timeout_secs: u64,

    #[serde(default = "default_true")]
    pub syntax_highlighting: bool,
}

fn default_tab_stop() -> usize {
    TAB_STOP
}

fn default_quit_times() -> usize {
    1
}

fn default_message_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: default_tab_stop(),
            quit_times: default_quit_times(),
            message_timeout_secs: default_message_timeout_secs(),
            syntax_highlighting: true,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rem").join("config.json"))
    }

    /// Load configuration from the default location, falling back to defaults if not found
    pub fn load_or_default() -> Self {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_or_fallback(&config_path),
            _ => Self::default(),
        }
    }

    /// Load and validate `path`; a file that can't be used is logged and replaced by defaults
    fn load_or_fallback(path: &Path) -> Self {
        match Self::load_validated(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {}: {}, using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load a JSON file and reject it if it does not validate
    pub fn load_validated<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&contents)?;
        tracing::info!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.editor.tab_stop == 0 {
            return Err(ConfigError::Validation(
                "tab_stop must be greater than 0".to_string(),
            ));
        }
        for profile in &self.languages {
            if profile.filetype.is_empty() {
                return Err(ConfigError::Validation(
                    "language filetype cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Profiles to resolve file names against, `None` when highlighting is turned off
    pub fn syntax_registry(&self) -> Option<SyntaxRegistry> {
        self.editor
            .syntax_highlighting
            .then(|| SyntaxRegistry::with_user_profiles(self.languages.clone()))
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.editor.message_timeout_secs)
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}
