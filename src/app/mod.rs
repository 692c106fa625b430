mod prompt_actions;
pub mod search;

use crate::config::Config;
use crate::input::keys::{InputEvent, Key};
use crate::model::document::Document;
use crate::primitives::syntax::SyntaxRegistry;
use crate::prompt::PromptType;
use crate::services::fs;
use crate::services::terminal::TerminalIo;
use crate::state::{Cursor, EditorState};
use crate::view::render::FrameComposer;
use crate::view::theme::Theme;
use anyhow::{Context, Result as AnyhowResult};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use search::SaveAsObserver;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Message shown on startup
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// The main editor: owns the state and drives it from terminal input
pub struct Editor<T: TerminalIo> {
    state: EditorState,

    terminal: T,

    config: Config,

    composer: FrameComposer,

    /// Profile table for file names, `None` when highlighting is disabled
    syntax: Option<SyntaxRegistry>,

    /// Remaining extra Ctrl-Q presses before a dirty document is abandoned
    quit_times: usize,

    should_quit: bool,
}

impl<T: TerminalIo> Editor<T> {
    /// Create an editor with an empty, unnamed document sized to the terminal
    pub fn new(config: Config, terminal: T) -> AnyhowResult<Self> {
        let (cols, rows) = terminal
            .size()
            .context("Failed to query terminal size")?;
        let document = Document::new(config.editor.tab_stop);
        let mut state = EditorState::new(document, cols, rows);
        state.set_status_message(HELP_MESSAGE);

        Ok(Self {
            state,
            terminal,
            composer: FrameComposer::new(Theme::default(), config.message_timeout()),
            syntax: config.syntax_registry(),
            quit_times: config.editor.quit_times,
            should_quit: false,
            config,
        })
    }

    /// Load `path` into the editor. A missing file opens as an empty document with that name.
    pub fn open(&mut self, path: &Path) -> AnyhowResult<()> {
        let tab_stop = self.config.editor.tab_stop;
        let syntax = self.syntax.as_ref().and_then(|r| r.resolve(path));
        let document = match fs::load_lines(path) {
            Ok(lines) => {
                tracing::info!("opened {:?} ({} lines)", path, lines.len());
                Document::from_lines(lines, tab_stop, syntax)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("{:?} does not exist, starting a new file", path);
                let mut document = Document::new(tab_stop);
                document.set_syntax(syntax);
                document
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to open {}", path.display()));
            }
        };

        self.state.document = document;
        self.state.filename = Some(path.to_path_buf());
        self.state.cursor = Cursor::default();
        self.state.viewport.row_offset = 0;
        self.state.viewport.col_offset = 0;
        Ok(())
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw, read a key, act on it; until quit or a terminal error
    pub fn run(&mut self) -> AnyhowResult<()> {
        loop {
            self.refresh_screen()?;
            let key = self.next_key()?;
            self.process_key(key)?;
            if self.should_quit {
                self.clear_screen()?;
                tracing::info!("editor exiting");
                return Ok(());
            }
        }
    }

    /// Compose the current state into one frame and write it
    pub fn refresh_screen(&mut self) -> AnyhowResult<()> {
        self.state.scroll();
        let frame = self.composer.compose(&self.state, Instant::now())?;
        self.terminal.write_frame(&frame)?;
        Ok(())
    }

    fn clear_screen(&mut self) -> AnyhowResult<()> {
        let mut frame = Vec::new();
        queue!(frame, Clear(ClearType::All), MoveTo(0, 0))?;
        self.terminal.write_frame(&frame)?;
        Ok(())
    }

    /// Next key press. Resizes arriving in between are applied and redrawn.
    fn next_key(&mut self) -> AnyhowResult<Key> {
        loop {
            match self.terminal.read_event()? {
                InputEvent::Key(key) => return Ok(key),
                InputEvent::Resize(cols, rows) => {
                    tracing::debug!("terminal resized to {}x{}", cols, rows);
                    self.state.viewport.resize(cols, rows);
                    self.refresh_screen()?;
                }
            }
        }
    }

    /// Apply one key press in normal (non-prompt) mode
    pub fn process_key(&mut self, key: Key) -> AnyhowResult<()> {
        match key {
            Key::Ctrl('q') => {
                if self.state.document.is_dirty() && self.quit_times > 0 {
                    self.state.set_status_message(format!(
                        "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                        self.quit_times
                    ));
                    self.quit_times -= 1;
                    return Ok(());
                }
                self.should_quit = true;
                return Ok(());
            }
            Key::Ctrl('s') => self.save()?,
            Key::Ctrl('f') => self.find()?,
            Key::Enter => self.state.insert_newline(),
            Key::Backspace | Key::Ctrl('h') => self.state.delete_char(),
            Key::Delete => self.state.delete_forward(),
            Key::Home => self.state.move_home(),
            Key::End => self.state.move_end(),
            Key::PageUp | Key::PageDown => self.state.page(key),
            Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown => {
                self.state.move_cursor(key)
            }
            Key::Escape | Key::Ctrl(_) => {}
            Key::Char(c) => self.state.insert_char(c),
        }
        self.quit_times = self.config.editor.quit_times;
        Ok(())
    }

    /// Write the document to its file, asking for a name first if it has none
    fn save(&mut self) -> AnyhowResult<()> {
        if self.state.filename.is_none() {
            let mut observer = SaveAsObserver::new(self.syntax.clone());
            if self.prompt(PromptType::SaveFileAs, &mut observer)?.is_none() {
                self.state.set_status_message("Save aborted");
                return Ok(());
            }
        }
        let Some(path) = self.state.filename.clone() else {
            return Ok(());
        };

        let content = self.state.document.serialize();
        match fs::save_lines(&path, &content) {
            Ok(written) => {
                self.state.document.mark_clean();
                self.state
                    .set_status_message(format!("{} bytes written to disk", written));
            }
            Err(e) => {
                tracing::warn!("failed to save {:?}: {}", path, e);
                self.state
                    .set_status_message(format!("Can't save! I/O error: {}", e));
            }
        }
        Ok(())
    }
}
