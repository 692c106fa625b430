use crate::input::keys::Key;
use crate::model::document::Document;
use crate::model::row::Row;
use crate::view::viewport::Viewport;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Cursor position in the document.
///
/// `row` may equal `num_rows`, the virtual row after the last line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Logical column (byte offset into the row)
    pub col: usize,
    pub row: usize,
    /// Tab-expanded column, refreshed by [`EditorState::scroll`]
    pub render_col: usize,
}

/// Transient text shown in the message bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    /// Whether the message is still within its display window at `now`
    pub fn is_visible(&self, now: Instant, timeout: Duration) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.set_at) < timeout
    }
}

/// The complete editor state - everything needed to represent the current editing session
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The document being edited
    pub document: Document,

    pub cursor: Cursor,

    /// The viewport
    pub viewport: Viewport,

    /// File the document is saved to, if any
    pub filename: Option<PathBuf>,

    /// Message bar content
    pub status: Option<StatusMessage>,
}

impl EditorState {
    /// Create a new editor state for a terminal of `width` x `height` cells
    pub fn new(document: Document, width: u16, height: u16) -> Self {
        tracing::info!("EditorState::new: width={}, height={}", width, height);
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(width, height),
            filename: None,
            status: None,
        }
    }

    pub fn set_status_message(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            set_at: Instant::now(),
        });
    }

    /// Current message text, regardless of age
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|m| m.text.as_str())
    }

    /// File name for display, `[No Name]` for unnamed documents
    pub fn display_name(&self) -> String {
        self.filename
            .as_deref()
            .map(Path::to_string_lossy)
            .map_or_else(|| "[No Name]".to_string(), |name| name.into_owned())
    }

    /// Row under the cursor, `None` on the virtual end row
    pub fn current_row(&self) -> Option<&Row> {
        self.document.row(self.cursor.row)
    }

    /// Refresh the cached render column and bring the cursor into view
    pub fn scroll(&mut self) {
        self.cursor.render_col = self.current_row().map_or(0, |row| {
            row.logical_to_rendered(self.cursor.col, self.document.tab_stop())
        });
        self.viewport
            .scroll_to(self.cursor.row, self.cursor.render_col);
    }

    /// Move the cursor one step for an arrow key
    pub fn move_cursor(&mut self, key: Key) {
        let row_len = self.current_row().map(Row::len);
        match key {
            Key::ArrowLeft => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                } else if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                    self.cursor.col = self.document.row_len(self.cursor.row);
                }
            }
            Key::ArrowRight => match row_len {
                Some(len) if self.cursor.col < len => self.cursor.col += 1,
                Some(_) => {
                    self.cursor.row += 1;
                    self.cursor.col = 0;
                }
                None => {}
            },
            Key::ArrowUp => {
                self.cursor.row = self.cursor.row.saturating_sub(1);
            }
            Key::ArrowDown => {
                if self.cursor.row < self.document.num_rows() {
                    self.cursor.row += 1;
                }
            }
            _ => {}
        }
        self.clamp_col();
    }

    /// Page up/down: snap to the viewport edge, then move a full screen
    pub fn page(&mut self, key: Key) {
        let screen = self.viewport.rows;
        let step = match key {
            Key::PageUp => {
                self.cursor.row = self.viewport.row_offset;
                Key::ArrowUp
            }
            Key::PageDown => {
                self.cursor.row = (self.viewport.row_offset + screen.max(1) - 1)
                    .min(self.document.num_rows());
                Key::ArrowDown
            }
            _ => return,
        };
        for _ in 0..screen {
            self.move_cursor(step);
        }
        self.clamp_col();
    }

    pub fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor.col = self.document.row_len(self.cursor.row);
    }

    fn clamp_col(&mut self) {
        let len = self.document.row_len(self.cursor.row);
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }

    /// Type a character at the cursor. Non-ASCII characters occupy one column per byte.
    pub fn insert_char(&mut self, ch: char) {
        if self.cursor.row == self.document.num_rows() {
            let at = self.document.num_rows();
            self.document.insert_row(at, b"");
        }
        let mut buf = [0u8; 4];
        for &byte in ch.encode_utf8(&mut buf).as_bytes() {
            self.document
                .insert_char(self.cursor.row, self.cursor.col, byte);
            self.cursor.col += 1;
        }
    }

    /// Break the line at the cursor
    pub fn insert_newline(&mut self) {
        if self.cursor.col == 0 {
            self.document.insert_row(self.cursor.row, b"");
        } else {
            self.document.split_row(self.cursor.row, self.cursor.col);
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn delete_char(&mut self) {
        if self.cursor.row == self.document.num_rows() {
            return;
        }
        if self.cursor.col == 0 && self.cursor.row == 0 {
            return;
        }
        if self.cursor.col > 0 {
            self.document
                .delete_char(self.cursor.row, self.cursor.col - 1);
            self.cursor.col -= 1;
        } else {
            self.cursor.col = self.document.row_len(self.cursor.row - 1);
            self.document.join_with_previous(self.cursor.row);
            self.cursor.row -= 1;
        }
    }

    /// Delete the character under the cursor
    pub fn delete_forward(&mut self) {
        let before = (self.cursor.row, self.cursor.col);
        self.move_cursor(Key::ArrowRight);
        if (self.cursor.row, self.cursor.col) != before {
            self.delete_char();
        }
    }
}
