//! Terminal access
//!
//! The editor talks to the terminal through [`TerminalIo`]: decoded key events in, whole
//! frames out. [`CrosstermTerminal`] is the real backend; [`TerminalModes`] owns raw mode
//! and the alternate screen and restores both on drop.

use crate::input::keys::{InputEvent, Key};
use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io::{self, Write};

/// Narrow interface to the terminal device
pub trait TerminalIo {
    /// Block until the next key press or resize
    fn read_event(&mut self) -> io::Result<InputEvent>;

    /// Write one complete frame and flush it
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;

    /// Terminal size as (columns, rows)
    fn size(&self) -> io::Result<(u16, u16)>;
}

/// [`TerminalIo`] backed by crossterm and stdout
pub struct CrosstermTerminal {
    stdout: io::Stdout,
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl TerminalIo for CrosstermTerminal {
    fn read_event(&mut self) -> io::Result<InputEvent> {
        loop {
            match event::read()? {
                Event::Key(key_event) => {
                    if let Some(key) = Key::from_key_event(key_event) {
                        return Ok(InputEvent::Key(key));
                    }
                }
                Event::Resize(cols, rows) => return Ok(InputEvent::Resize(cols, rows)),
                _ => {}
            }
        }
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        let mut lock = self.stdout.lock();
        lock.write_all(frame)?;
        lock.flush()
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

/// Raw mode + alternate screen for the lifetime of the value
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalModes {
    /// Enter raw mode and the alternate screen
    pub fn enable() -> io::Result<Self> {
        let mut modes = Self {
            raw_mode: false,
            alternate_screen: false,
        };
        enable_raw_mode()?;
        modes.raw_mode = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        modes.alternate_screen = true;
        tracing::debug!("terminal modes enabled");
        Ok(modes)
    }

    /// Undo everything `enable` did. Safe to call more than once.
    pub fn restore(&mut self) {
        if self.alternate_screen {
            if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
                tracing::warn!("failed to leave alternate screen: {}", e);
            }
            self.alternate_screen = false;
        }
        if self.raw_mode {
            if let Err(e) = disable_raw_mode() {
                tracing::warn!("failed to disable raw mode: {}", e);
            }
            self.raw_mode = false;
        }
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Best-effort restore for the panic hook, where no [`TerminalModes`] is reachable
pub fn emergency_cleanup() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}
