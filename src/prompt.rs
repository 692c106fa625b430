//! Prompt/minibuffer system for user input

use crate::input::keys::Key;
use crate::state::EditorState;

/// Placeholder in a prompt template that is replaced by the current input
pub const INPUT_PLACEHOLDER: &str = "{}";

/// Type of prompt - determines what action to take when user confirms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Save current document to a new file
    SaveFileAs,
    /// Search for text in the document
    Search,
}

impl PromptType {
    pub fn template(self) -> &'static str {
        match self {
            PromptType::SaveFileAs => "Save as: {} (ESC to cancel)",
            PromptType::Search => "Search: {} (Use ESC/Arrows/Enter)",
        }
    }
}

/// What a key did to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Keep reading keys
    Pending,
    /// Enter with non-empty input
    Confirmed(String),
    /// Escape
    Cancelled,
}

/// Receives every key pressed while a prompt is open.
///
/// Called after the prompt has applied the key, with the input as it now stands.
pub trait KeystrokeObserver {
    fn on_keystroke(&mut self, state: &mut EditorState, input: &str, key: Key);

    /// Extra text shown after the prompt message
    fn hint(&self) -> Option<String> {
        None
    }
}

/// Prompt state for the minibuffer
#[derive(Debug, Clone)]
pub struct Prompt {
    /// The prompt template (e.g., "Search: {}")
    pub template: String,
    /// User's current input
    pub input: String,
    pub prompt_type: PromptType,
}

impl Prompt {
    /// Create a new prompt
    pub fn new(prompt_type: PromptType) -> Self {
        Self {
            template: prompt_type.template().to_string(),
            input: String::new(),
            prompt_type,
        }
    }

    /// Text for the message bar
    pub fn message(&self) -> String {
        self.template.replacen(INPUT_PLACEHOLDER, &self.input, 1)
    }

    /// Message bar text with an observer's hint appended in brackets
    pub fn message_with_hint(&self, hint: Option<&str>) -> String {
        match hint {
            Some(hint) => format!("{} [{}]", self.message(), hint),
            None => self.message(),
        }
    }

    /// Insert a character at the end of the input
    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Delete the last character (backspace)
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Apply one key to the prompt
    pub fn handle_key(&mut self, key: Key) -> PromptOutcome {
        match key {
            k if k.is_erase() => {
                self.backspace();
                PromptOutcome::Pending
            }
            Key::Escape => PromptOutcome::Cancelled,
            Key::Enter if !self.input.is_empty() => PromptOutcome::Confirmed(self.input.clone()),
            Key::Char(c) if !c.is_control() => {
                self.insert_char(c);
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        }
    }
}
