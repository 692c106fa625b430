//! Incremental search and save-as keystroke observers

use crate::input::keys::Key;
use crate::primitives::highlighter::Highlight;
use crate::primitives::syntax::SyntaxRegistry;
use crate::prompt::KeystrokeObserver;
use crate::state::EditorState;
use std::path::PathBuf;

/// Direction to step through rows when looking for the next match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// Search session state. Lives only while the search prompt is open.
#[derive(Debug, Clone, Default)]
pub struct SearchObserver {
    /// Row of the current match; `None` starts the next scan from the top
    last_match: Option<usize>,
    direction: SearchDirection,
    /// Highlight of the matched row before the match overlay was painted
    saved_highlight: Option<(usize, Vec<Highlight>)>,
}

impl SearchObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    fn restore_highlight(&mut self, state: &mut EditorState) {
        if let Some((row, snapshot)) = self.saved_highlight.take() {
            state.document.restore_highlight(row, snapshot);
        }
    }

    /// Row to look at after `current`, wrapping at both ends
    fn step(&self, current: Option<usize>, num_rows: usize) -> usize {
        match (current, self.direction) {
            (None, _) => 0,
            (Some(row), SearchDirection::Forward) => (row + 1) % num_rows,
            (Some(0), SearchDirection::Backward) => num_rows - 1,
            (Some(row), SearchDirection::Backward) => row - 1,
        }
    }

    fn find_next(&mut self, state: &mut EditorState, query: &str) {
        let num_rows = state.document.num_rows();
        let needle = query.as_bytes();
        let mut current = self.last_match;

        for _ in 0..num_rows {
            let at = self.step(current, num_rows);
            current = Some(at);
            let Some(row) = state.document.row(at) else {
                break;
            };
            let Some(offset) = find_bytes(row.render(), needle) else {
                continue;
            };

            tracing::trace!("search {:?}: match at row {} offset {}", query, at, offset);
            self.last_match = Some(at);
            state.cursor.row = at;
            state.cursor.col = row.rendered_to_logical(offset, state.document.tab_stop());
            // puts the match row at the top of the window on the next scroll
            state.viewport.row_offset = num_rows;
            state.viewport.col_offset = 0;

            self.saved_highlight = state
                .document
                .highlight_snapshot(at)
                .map(|snapshot| (at, snapshot));
            state
                .document
                .overlay_highlight(at, offset..offset + needle.len(), Highlight::SearchMatch);
            return;
        }
    }
}

impl KeystrokeObserver for SearchObserver {
    fn on_keystroke(&mut self, state: &mut EditorState, input: &str, key: Key) {
        self.restore_highlight(state);

        match key {
            Key::Enter | Key::Escape => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
                return;
            }
            Key::ArrowRight | Key::ArrowDown => self.direction = SearchDirection::Forward,
            Key::ArrowLeft | Key::ArrowUp => self.direction = SearchDirection::Backward,
            _ => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
            }
        }
        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }
        if input.is_empty() {
            return;
        }
        self.find_next(state, input);
    }
}

/// Renames the document when the save-as prompt is confirmed
#[derive(Debug, Clone, Default)]
pub struct SaveAsObserver {
    /// Profiles to pick from for the new name; `None` leaves highlighting off
    registry: Option<SyntaxRegistry>,
    /// Filetype the input typed so far would resolve to
    preview: Option<String>,
}

impl SaveAsObserver {
    pub fn new(registry: Option<SyntaxRegistry>) -> Self {
        Self {
            registry,
            preview: None,
        }
    }
}

impl KeystrokeObserver for SaveAsObserver {
    fn on_keystroke(&mut self, state: &mut EditorState, input: &str, key: Key) {
        let path = PathBuf::from(input);
        let syntax = self.registry.as_ref().and_then(|r| r.resolve(&path));
        self.preview = syntax.as_ref().map(|s| s.filetype.clone());

        if key != Key::Enter || input.is_empty() {
            return;
        }
        tracing::info!(
            "renamed document to {:?} (filetype {:?})",
            path,
            self.preview
        );
        state.filename = Some(path);
        state.document.set_syntax(syntax);
    }

    fn hint(&self) -> Option<String> {
        self.preview.clone()
    }
}

/// Byte offset of the first occurrence of `needle` in `haystack`
fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
