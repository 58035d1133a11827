//! Terminal integration layer (crossterm).
//!
//! Everything that names `crossterm` types lives here or in
//! [`backend::terminal`](crate::backend::terminal).

pub mod crossterm;
pub mod terminal_guard;
