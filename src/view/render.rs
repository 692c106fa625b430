//! Frame composition
//!
//! A frame is assembled into one byte buffer and handed to the terminal in a single write:
//! hide cursor, text rows, status bar, message bar, then position and show the cursor.
//! Color escapes are only emitted where the highlight color changes between neighbours.

use crate::model::row::Row;
use crate::state::EditorState;
use crate::view::status_bar::StatusBarRenderer;
use crate::view::theme::Theme;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io;
use std::time::{Duration, Instant};

/// Marker drawn on rows past the end of the document
pub const FILLER: u8 = b'~';

/// Builds terminal frames from editor state
#[derive(Debug, Clone)]
pub struct FrameComposer {
    theme: Theme,
    message_timeout: Duration,
}

impl FrameComposer {
    pub fn new(theme: Theme, message_timeout: Duration) -> Self {
        Self {
            theme,
            message_timeout,
        }
    }

    /// Compose one full frame. The caller is expected to have scrolled `state` already.
    pub fn compose(&self, state: &EditorState, now: Instant) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(state.viewport.rows * (state.viewport.cols + 16));

        queue!(buf, Hide, MoveTo(0, 0))?;
        self.draw_rows(&mut buf, state)?;
        let vp = &state.viewport;
        // short terminals keep the status bar and drop the message bar
        if vp.height >= 1 {
            StatusBarRenderer::render_status_bar(&mut buf, state)?;
        }
        if vp.height >= 2 {
            buf.extend_from_slice(b"\r\n");
            StatusBarRenderer::render_message_bar(&mut buf, state, now, self.message_timeout)?;
        }

        let (x, y) = vp.screen_position(state.cursor.row, state.cursor.render_col);
        queue!(buf, MoveTo(x, y), Show)?;
        Ok(buf)
    }

    fn draw_rows(&self, buf: &mut Vec<u8>, state: &EditorState) -> io::Result<()> {
        let vp = &state.viewport;
        for y in 0..vp.rows {
            match state.document.row(y + vp.row_offset) {
                Some(row) => self.draw_row(buf, row, vp.col_offset, vp.cols)?,
                None if state.document.num_rows() == 0 && y == vp.rows / 3 => {
                    draw_banner(buf, vp.cols)
                }
                None => buf.push(FILLER),
            }
            queue!(buf, Clear(ClearType::UntilNewLine))?;
            buf.extend_from_slice(b"\r\n");
        }
        Ok(())
    }

    /// Draw the visible slice of one row
    fn draw_row(&self, buf: &mut Vec<u8>, row: &Row, col_offset: usize, cols: usize) -> io::Result<()> {
        let render = row.render();
        let start = col_offset.min(render.len());
        let end = col_offset.saturating_add(cols).min(render.len());

        let mut current: Option<Color> = None;
        for (&c, &class) in render[start..end].iter().zip(&row.highlight()[start..end]) {
            if c.is_ascii_control() {
                let symbol = if c <= 26 { b'@' + c } else { b'?' };
                queue!(buf, SetAttribute(Attribute::Reverse))?;
                buf.push(symbol);
                queue!(buf, SetAttribute(Attribute::NoReverse))?;
                continue;
            }
            let color = self.theme.color(class);
            if color != current {
                queue!(buf, SetForegroundColor(color.unwrap_or(Color::Reset)))?;
                current = color;
            }
            buf.push(c);
        }
        if current.is_some() {
            queue!(buf, SetForegroundColor(Color::Reset))?;
        }
        Ok(())
    }
}

fn draw_banner(buf: &mut Vec<u8>, cols: usize) {
    let banner = format!("Rem Terminal Editor | v{}", env!("CARGO_PKG_VERSION"));
    let len = banner.len().min(cols);
    let mut padding = (cols - len) / 2;
    if padding > 0 {
        buf.push(FILLER);
        padding -= 1;
    }
    buf.extend(std::iter::repeat(b' ').take(padding));
    buf.extend_from_slice(&banner.as_bytes()[..len]);
}
