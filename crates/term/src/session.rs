//! Raw-mode terminal session.
//!
//! Switches the terminal into raw mode on the alternate screen with mouse
//! capture, and restores it on exit. Rendering itself goes through
//! [`crate::TerminalSurface`].

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalSession {
    stdout: io::Stdout,
    active: bool,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            active: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        self.active = false;
        Ok(())
    }

    /// Terminal size as `(columns, rows)`, with a conventional fallback.
    pub fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    pub fn out(&mut self) -> &mut io::Stdout {
        &mut self.stdout
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
