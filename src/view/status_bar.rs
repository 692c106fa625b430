//! Status bar and message bar rendering

use crate::state::EditorState;
use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use std::io;
use std::time::{Duration, Instant};

/// Longest file name shown in the status bar
const MAX_NAME_WIDTH: usize = 20;

/// Renders the status bar and message bar
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    /// Left-hand status text: name, line count and modified flag
    pub fn left_status(state: &EditorState) -> String {
        let name = state.display_name();
        let modified = if state.document.is_dirty() {
            " (modified)"
        } else {
            ""
        };
        format!(
            "{} - {} lines{}",
            truncate(&name, MAX_NAME_WIDTH),
            state.document.num_rows(),
            modified
        )
    }

    /// Right-hand status text: filetype and cursor row / total rows
    pub fn right_status(state: &EditorState) -> String {
        format!(
            "{} | {}/{}",
            state.document.filetype().unwrap_or("no ft"),
            state.cursor.row + 1,
            state.document.num_rows()
        )
    }

    /// Render the inverse-video status line
    pub fn render_status_bar(buf: &mut Vec<u8>, state: &EditorState) -> io::Result<()> {
        let width = state.viewport.cols;
        let left = Self::left_status(state);
        let right = Self::right_status(state);

        queue!(buf, SetAttribute(Attribute::Reverse))?;
        let left = truncate(&left, width);
        buf.extend_from_slice(left.as_bytes());
        let mut len = left.len();
        while len < width {
            if width - len == right.len() {
                buf.extend_from_slice(right.as_bytes());
                break;
            }
            buf.push(b' ');
            len += 1;
        }
        queue!(buf, SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Render the message line; messages older than `timeout` are not shown
    pub fn render_message_bar(
        buf: &mut Vec<u8>,
        state: &EditorState,
        now: Instant,
        timeout: Duration,
    ) -> io::Result<()> {
        queue!(buf, Clear(ClearType::UntilNewLine))?;
        if let Some(message) = &state.status {
            if message.is_visible(now, timeout) {
                let text = truncate(&message.text, state.viewport.cols);
                buf.extend_from_slice(text.as_bytes());
            }
        }
        Ok(())
    }
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a character
pub fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
