//! A single document row and its rendered form

use crate::primitives::highlighter::Highlight;

/// Default tab width in rendered columns.
pub const TAB_STOP: usize = 4;

/// One logical line of the document.
///
/// `render` and `highlight` are derived from `chars` and always have equal length. They are
/// refreshed by the owning [`Document`](crate::model::document::Document) after each change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub(crate) index: usize,
    pub(crate) chars: Vec<u8>,
    pub(crate) render: Vec<u8>,
    pub(crate) highlight: Vec<Highlight>,
    pub(crate) ends_in_block_comment: bool,
}

impl Row {
    pub(crate) fn new(index: usize, chars: Vec<u8>) -> Self {
        Self {
            index,
            chars,
            ..Self::default()
        }
    }

    /// Position of this row in the document
    pub fn index(&self) -> usize {
        self.index
    }

    /// Raw bytes, without the trailing newline
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Tab-expanded bytes as drawn on screen
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    pub fn ends_in_block_comment(&self) -> bool {
        self.ends_in_block_comment
    }

    /// Number of logical columns
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Rebuild `render` from `chars`, expanding each tab to the next multiple of `tab_stop`.
    ///
    /// The highlight array is left for the caller to recompute.
    pub(crate) fn update_render(&mut self, tab_stop: usize) {
        let tabs = self.chars.iter().filter(|c| **c == b'\t').count();
        let mut render = Vec::with_capacity(self.chars.len() + tabs * (tab_stop - 1));
        for &c in &self.chars {
            if c == b'\t' {
                render.push(b' ');
                while render.len() % tab_stop != 0 {
                    render.push(b' ');
                }
            } else {
                render.push(c);
            }
        }
        self.render = render;
    }

    /// Rendered column of logical column `col`.
    pub fn logical_to_rendered(&self, col: usize, tab_stop: usize) -> usize {
        let end = col.min(self.chars.len());
        self.chars[..end].iter().fold(0, |rx, &c| {
            if c == b'\t' {
                rx + (tab_stop - 1) - (rx % tab_stop) + 1
            } else {
                rx + 1
            }
        })
    }

    /// Logical column that covers rendered column `rendered_col`.
    ///
    /// Returns the row length when `rendered_col` lies past the rendered end.
    pub fn rendered_to_logical(&self, rendered_col: usize, tab_stop: usize) -> usize {
        let mut rx = 0;
        for (cx, &c) in self.chars.iter().enumerate() {
            if c == b'\t' {
                rx += (tab_stop - 1) - (rx % tab_stop);
            }
            rx += 1;
            if rx > rendered_col {
                return cx;
            }
        }
        self.chars.len()
    }
}
