//! Backend-neutral input events and the queue the console drains them into.

use std::collections::VecDeque;

use crate::key::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Key(Key),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub column: u16,
    pub row: u16,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, column: u16, row: u16) -> Self {
        Self { kind, column, row }
    }

    pub fn left_click(column: u16, row: u16) -> Self {
        Self::new(MouseEventKind::Down(MouseButton::Left), column, row)
    }
}

/// Pending input, split by kind so keys and clicks are consumed independently.
#[derive(Debug, Default)]
pub struct InputQueue {
    keys: VecDeque<Key>,
    last_click: Option<(u16, u16)>,
    resized: Option<(u16, u16)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ConsoleEvent) {
        match event {
            ConsoleEvent::Key(key) => self.keys.push_back(key),
            ConsoleEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
            }) => self.last_click = Some((column, row)),
            ConsoleEvent::Mouse(mouse) => {
                tracing::trace!(kind = ?mouse.kind, "ignoring mouse event");
            }
            ConsoleEvent::Resize(w, h) => self.resized = Some((w, h)),
        }
    }

    pub fn has_key(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn pop_key(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }

    /// The most recent left click since the last call.
    pub fn take_click(&mut self) -> Option<(u16, u16)> {
        self.last_click.take()
    }

    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }
}

#[cfg(test)]
#[path = "../tests/unit/event.rs"]
mod tests;
