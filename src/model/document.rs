//! The row store: an ordered sequence of rows plus the syntax profile that colors them
//!
//! Every mutation keeps three things in step:
//! - row `index` fields match positions
//! - `render`/`highlight` of touched rows are regenerated together
//! - block-comment state is propagated forward until a row's exit state stops changing

use crate::model::row::{Row, TAB_STOP};
use crate::primitives::highlighter::{highlight_row, Highlight};
use crate::primitives::syntax::SyntaxProfile;
use std::ops::Range;
use std::sync::Arc;

/// In-memory document.
#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    syntax: Option<Arc<SyntaxProfile>>,
    tab_stop: usize,
    /// Number of mutations since the last load/save
    dirty: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(TAB_STOP)
    }
}

impl Document {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            syntax: None,
            tab_stop: tab_stop.max(1),
            dirty: 0,
        }
    }

    /// Build a clean document from loaded lines.
    pub fn from_lines<I>(lines: I, tab_stop: usize, syntax: Option<Arc<SyntaxProfile>>) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut doc = Self::new(tab_stop);
        doc.syntax = syntax;
        doc.rows = lines
            .into_iter()
            .enumerate()
            .map(|(index, chars)| Row::new(index, chars))
            .collect();
        for row in &mut doc.rows {
            row.update_render(doc.tab_stop);
        }
        doc.rehighlight(0, doc.rows.len());
        doc
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Length of row `at` in logical columns, 0 for the virtual end row.
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn syntax(&self) -> Option<&SyntaxProfile> {
        self.syntax.as_deref()
    }

    pub fn filetype(&self) -> Option<&str> {
        self.syntax.as_ref().map(|s| s.filetype.as_str())
    }

    pub fn dirty(&self) -> usize {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Switch profiles and re-highlight the whole document.
    pub fn set_syntax(&mut self, syntax: Option<Arc<SyntaxProfile>>) {
        self.syntax = syntax;
        self.rehighlight(0, self.rows.len());
    }

    /// Insert a new row before `at`; `at == num_rows` appends. Out of range is a no-op.
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(at, text.to_vec()));
        self.renumber_from(at + 1);
        self.rows[at].update_render(self.tab_stop);
        // the row after the new one has a new predecessor
        self.rehighlight(at, 2);
        self.dirty += 1;
    }

    /// Remove row `at`. Out of range is a no-op.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.renumber_from(at);
        self.rehighlight(at, 1);
        self.dirty += 1;
    }

    /// Append bytes to the end of row `at`.
    pub fn append_text(&mut self, at: usize, text: &[u8]) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        row.chars.extend_from_slice(text);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Insert one byte at `(at, col)`; `col` may equal the row length.
    pub fn insert_char(&mut self, at: usize, col: usize, ch: u8) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        if col > row.chars.len() {
            return;
        }
        row.chars.insert(col, ch);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Delete the byte at `(at, col)`.
    pub fn delete_char(&mut self, at: usize, col: usize) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        if col >= row.chars.len() {
            return;
        }
        row.chars.remove(col);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Move everything from `col` onwards into a new row below `at`.
    pub fn split_row(&mut self, at: usize, col: usize) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        if col > row.chars.len() {
            return;
        }
        let tail = row.chars.split_off(col);
        self.update_row(at);
        self.insert_row(at + 1, &tail);
    }

    /// Append row `at` to the previous row and remove it. Row 0 has no previous row.
    pub fn join_with_previous(&mut self, at: usize) {
        if at == 0 || at >= self.rows.len() {
            return;
        }
        let chars = std::mem::take(&mut self.rows[at].chars);
        self.append_text(at - 1, &chars);
        self.delete_row(at);
    }

    /// Whole document as one buffer: rows joined with LF, LF after the last row.
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.chars.len() + 1).sum();
        let mut buf = Vec::with_capacity(total);
        for row in &self.rows {
            buf.extend_from_slice(&row.chars);
            buf.push(b'\n');
        }
        buf
    }

    /// Copy of a row's highlight array, used to undo a temporary overlay.
    pub fn highlight_snapshot(&self, at: usize) -> Option<Vec<Highlight>> {
        self.rows.get(at).map(|r| r.highlight.clone())
    }

    /// Put back a snapshot taken with [`highlight_snapshot`](Self::highlight_snapshot).
    ///
    /// Ignored if the row is gone or its rendered length no longer matches.
    pub fn restore_highlight(&mut self, at: usize, snapshot: Vec<Highlight>) {
        if let Some(row) = self.rows.get_mut(at) {
            if row.render.len() == snapshot.len() {
                row.highlight = snapshot;
            }
        }
    }

    /// Paint `class` over a rendered range of a row without touching `chars`.
    pub fn overlay_highlight(&mut self, at: usize, range: Range<usize>, class: Highlight) {
        if let Some(row) = self.rows.get_mut(at) {
            let end = range.end.min(row.highlight.len());
            let start = range.start.min(end);
            row.highlight[start..end].fill(class);
        }
    }

    fn renumber_from(&mut self, start: usize) {
        for (index, row) in self.rows.iter_mut().enumerate().skip(start) {
            row.index = index;
        }
    }

    fn update_row(&mut self, at: usize) {
        self.rows[at].update_render(self.tab_stop);
        self.rehighlight(at, 1);
    }

    /// Re-classify rows starting at `start`.
    ///
    /// The first `forced` rows are always recomputed; after that the walk continues only while
    /// a row's block-comment exit state differs from what it was before.
    fn rehighlight(&mut self, start: usize, mut forced: usize) {
        let mut at = start;
        while at < self.rows.len() {
            let changed = self.highlight_one(at);
            forced = forced.saturating_sub(1);
            if !changed && forced == 0 {
                break;
            }
            at += 1;
        }
        if at > start + 1 {
            tracing::trace!("re-highlighted rows {}..{}", start, at);
        }
    }

    /// Classify one row; returns whether its exit state changed.
    fn highlight_one(&mut self, at: usize) -> bool {
        let entry = at > 0 && self.rows[at - 1].ends_in_block_comment;
        let result = highlight_row(&self.rows[at].render, entry, self.syntax.as_deref());
        let row = &mut self.rows[at];
        row.highlight = result.classes;
        let changed = row.ends_in_block_comment != result.open_block_comment;
        row.ends_in_block_comment = result.open_block_comment;
        changed
    }
}
