use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use crate::backend::{Backend, CellStyle, DrawCmd};
use crate::event::ConsoleEvent;
use crate::tui::crossterm::{into_console_event, into_crossterm_color};

/// Terminal backend writing escape sequences to `W` and reading crossterm events.
pub struct CrosstermBackend<W: Write> {
    out: W,
}

impl CrosstermBackend<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn queue_style(&mut self, style: CellStyle) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(into_crossterm_color(style.fg)),
            SetBackgroundColor(into_crossterm_color(style.bg))
        )?;
        if style.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }
}

impl<W: Write> Backend for CrosstermBackend<W> {
    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<ConsoleEvent>> {
        let mut wait = timeout;
        loop {
            if !crossterm::event::poll(wait)? {
                return Ok(None);
            }
            let event = crossterm::event::read()?;
            if let Some(event) = into_console_event(event) {
                return Ok(Some(event));
            }
            // Skip events without a console mapping, but only drain what is already buffered.
            wait = Duration::ZERO;
        }
    }

    fn draw(&mut self, cmds: &[DrawCmd]) -> io::Result<()> {
        for cmd in cmds {
            match cmd {
                DrawCmd::Clear => {
                    queue!(
                        self.out,
                        SetAttribute(Attribute::Reset),
                        ResetColor,
                        Clear(ClearType::All),
                        MoveTo(0, 0)
                    )?;
                }
                DrawCmd::Text { x, y, text, style } => {
                    queue!(self.out, MoveTo(*x, *y))?;
                    self.queue_style(*style)?;
                    queue!(self.out, Print(text))?;
                }
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backend/terminal.rs"]
mod tests;
