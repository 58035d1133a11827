use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::color::Color;
use crate::event::{ConsoleEvent, MouseButton, MouseEvent, MouseEventKind};
use crate::key::Key;

pub fn into_console_event(event: Event) -> Option<ConsoleEvent> {
    match event {
        Event::Key(key) => into_key(key).map(ConsoleEvent::Key),
        Event::Mouse(mouse) => Some(ConsoleEvent::Mouse(into_mouse_event(mouse))),
        Event::Resize(w, h) => Some(ConsoleEvent::Resize(w, h)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}

/// Returns `None` for releases and for keys without a console key code.
pub fn into_key(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Char(ch) => into_char_key(ch, event.modifiers),
        KeyCode::Null => Key::from_ascii(0),
        KeyCode::Enter => Some(Key::ENTER),
        KeyCode::Tab | KeyCode::BackTab => Some(Key::TAB),
        KeyCode::Esc => Some(Key::ESC),
        KeyCode::Backspace | KeyCode::Delete => Some(Key::DELETE),
        KeyCode::Left => Some(Key::LEFT),
        KeyCode::Up => Some(Key::UP),
        KeyCode::Right => Some(Key::RIGHT),
        KeyCode::Down => Some(Key::DOWN),
        KeyCode::F(n) => Key::function(n),
        _ => None,
    }
}

fn into_char_key(ch: char, modifiers: KeyModifiers) -> Option<Key> {
    if !ch.is_ascii() {
        return None;
    }
    let byte = ch as u8;

    // Raw terminals deliver Ctrl+letter as the C0 control code.
    if modifiers.contains(KeyModifiers::CONTROL) {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'@' | b'[' | b'\\' | b']' | b'^' | b'_' => {
                return Key::from_ascii(byte & 0x1f);
            }
            b' ' => return Key::from_ascii(0),
            _ => {}
        }
    }

    Key::from_ascii(byte)
}

pub fn into_mouse_event(event: crossterm::event::MouseEvent) -> MouseEvent {
    MouseEvent {
        kind: into_mouse_event_kind(event.kind),
        column: event.column,
        row: event.row,
    }
}

fn into_mouse_button(button: crossterm::event::MouseButton) -> MouseButton {
    match button {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

fn into_mouse_event_kind(kind: crossterm::event::MouseEventKind) -> MouseEventKind {
    match kind {
        crossterm::event::MouseEventKind::Down(button) => {
            MouseEventKind::Down(into_mouse_button(button))
        }
        crossterm::event::MouseEventKind::Up(button) => {
            MouseEventKind::Up(into_mouse_button(button))
        }
        crossterm::event::MouseEventKind::Drag(button) => {
            MouseEventKind::Drag(into_mouse_button(button))
        }
        crossterm::event::MouseEventKind::Moved => MouseEventKind::Moved,
        crossterm::event::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        crossterm::event::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        crossterm::event::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
        crossterm::event::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
    }
}

pub fn into_crossterm_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as C;

    match color {
        Color::Black => C::Black,
        Color::Blue => C::DarkBlue,
        Color::Green => C::DarkGreen,
        Color::Cyan => C::DarkCyan,
        Color::Red => C::DarkRed,
        Color::Pink => C::DarkMagenta,
        Color::Yellow => C::DarkYellow,
        Color::White => C::Grey,
        Color::LightBlack => C::DarkGrey,
        Color::LightBlue => C::Blue,
        Color::LightGreen => C::Green,
        Color::LightCyan => C::Cyan,
        Color::LightRed => C::Red,
        Color::LightPink => C::Magenta,
        Color::LightYellow => C::Yellow,
        Color::LightWhite => C::White,
        Color::Default => C::Reset,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
