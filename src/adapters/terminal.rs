//! Crossterm terminal adapter.
//!
//! [`TerminalSurface`] implements [`DisplaySurface`] over raw-mode stdout
//! with queued writes flushed once per frame, and [`TerminalInput`]
//! implements [`InputPort`] by polling crossterm key events without
//! blocking.
//!
//! The monitor deliberately stays on the primary screen (no alternate
//! buffer): the pin table remains visible in the scrollback after exit,
//! and the hardware cursor stays visible because it doubles as the
//! selection marker.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use log::warn;

use crate::app::events::InputEvent;
use crate::app::ports::{CellStyle, DisplaySurface, InputPort};

/// Raw-mode stdout implementing the display port.
pub struct TerminalSurface {
    out: Stdout,
}

impl TerminalSurface {
    /// Enter raw mode.  Call [`release`](Self::release) before exit.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { out: io::stdout() })
    }

    /// Restore the terminal: reset attributes and leave raw mode.
    /// Idempotent.
    pub fn release(&mut self) -> io::Result<()> {
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }

    fn try_put(&mut self, col: u16, row: u16, text: &str, style: CellStyle) -> io::Result<()> {
        self.out
            .queue(MoveTo(col.saturating_sub(1), row.saturating_sub(1)))?;
        if style.contains(CellStyle::INVERSE) {
            self.out.queue(SetAttribute(Attribute::Reverse))?;
        }
        if style.contains(CellStyle::BOLD) {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.out.queue(Print(text))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// The display contract absorbs I/O failures; log and carry on.
fn warn_on_err(res: io::Result<()>) {
    if let Err(e) = res {
        warn!("terminal write failed: {e}");
    }
}

impl DisplaySurface for TerminalSurface {
    fn clear(&mut self) {
        let res = self
            .out
            .queue(Clear(ClearType::All))
            .and_then(|out| out.queue(MoveTo(0, 0)))
            .map(|_| ());
        warn_on_err(res);
    }

    fn put_text(&mut self, col: u16, row: u16, text: &str, style: CellStyle) {
        let res = self.try_put(col, row, text, style);
        warn_on_err(res);
    }

    fn position_cursor(&mut self, col: u16, row: u16) {
        let res = self
            .out
            .queue(MoveTo(col.saturating_sub(1), row.saturating_sub(1)))
            .map(|_| ());
        warn_on_err(res);
    }

    fn present(&mut self) {
        warn_on_err(self.out.flush());
    }
}

/// Non-blocking key decoder.
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for TerminalInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        match event::poll(Duration::ZERO) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    match key.code {
                        KeyCode::Up => Some(InputEvent::MoveUp),
                        KeyCode::Down => Some(InputEvent::MoveDown),
                        KeyCode::Enter => Some(InputEvent::Toggle),
                        KeyCode::Esc | KeyCode::Char(' ') => Some(InputEvent::Quit),
                        // Raw mode absorbs SIGINT; quit so the tone is
                        // never left sounding.
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            Some(InputEvent::Quit)
                        }
                        _ => None,
                    }
                }
                Ok(_) => None,
                Err(e) => {
                    warn!("key read failed: {e}");
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                warn!("key poll failed: {e}");
                None
            }
        }
    }
}
