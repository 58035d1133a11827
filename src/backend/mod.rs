//! Output/input backends.
//!
//! The console computes clipped draw commands itself; a backend only has to put
//! them on a screen and hand back input events. This keeps the rest of the crate
//! free of `crossterm` types.

use std::io;
use std::time::Duration;

use crate::color::Color;
use crate::event::ConsoleEvent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub underline: bool,
}

impl CellStyle {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            underline: false,
        }
    }

    pub fn underlined(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCmd {
    /// Blank the whole screen with default colors.
    Clear,
    /// Text already clipped to the screen; every grapheme is visible.
    Text {
        x: u16,
        y: u16,
        text: String,
        style: CellStyle,
    },
}

pub trait Backend {
    /// Current size as (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Waits up to `timeout` for the next event. `Duration::ZERO` never blocks.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<ConsoleEvent>>;

    fn draw(&mut self, cmds: &[DrawCmd]) -> io::Result<()>;
}

pub mod terminal;
