/// The viewport - what portion of the rendered document is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible document row
    pub row_offset: usize,

    /// First visible rendered column (horizontal scroll position)
    pub col_offset: usize,

    /// Number of text rows (terminal height minus status and message lines)
    pub rows: usize,

    /// Number of columns
    pub cols: usize,

    /// Full terminal height, bars included
    pub height: usize,
}

/// Lines reserved below the text area: status bar and message bar
pub const RESERVED_ROWS: usize = 2;

impl Viewport {
    /// Create a viewport for a terminal of `width` x `height` cells
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows: (height as usize).saturating_sub(RESERVED_ROWS),
            cols: width as usize,
            height: height as usize,
        }
    }

    /// Update terminal dimensions, keeping the scroll position
    pub fn resize(&mut self, width: u16, height: u16) {
        self.rows = (height as usize).saturating_sub(RESERVED_ROWS);
        self.cols = width as usize;
        self.height = height as usize;
        tracing::debug!("viewport resized to {}x{}", self.cols, self.rows);
    }

    /// Scroll just enough that `(row, render_col)` is inside the window.
    /// A window with no text rows or no columns pins the offset to the cursor.
    pub fn scroll_to(&mut self, row: usize, render_col: usize) {
        if row < self.row_offset {
            self.row_offset = row;
        }
        if row >= self.row_offset + self.rows {
            self.row_offset = (row + 1).saturating_sub(self.rows.max(1));
        }

        if render_col < self.col_offset {
            self.col_offset = render_col;
        }
        if render_col >= self.col_offset + self.cols {
            self.col_offset = (render_col + 1).saturating_sub(self.cols.max(1));
        }
    }

    /// Screen cell for a rendered position, clamped to the terminal
    pub fn screen_position(&self, row: usize, render_col: usize) -> (u16, u16) {
        let x = render_col
            .saturating_sub(self.col_offset)
            .min(self.cols.saturating_sub(1));
        let y = row
            .saturating_sub(self.row_offset)
            .min(self.height.saturating_sub(1));
        (
            u16::try_from(x).unwrap_or(u16::MAX),
            u16::try_from(y).unwrap_or(u16::MAX),
        )
    }
}
