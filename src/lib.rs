//! console_lib - a single-instance terminal console for simple full-screen programs
//!
//! Module layout:
//! - console: the `Console` session (mode switching, input, drawing)
//! - key / color: portable key codes and the 16-color palette
//! - event / screen: input queueing and clipped text placement
//! - backend: output/input backends (crossterm terminal, headless test buffer)
//! - tui: crossterm integration (event conversion, terminal mode guard, signals)
//! - config: `ConsoleConfig` and its environment overrides

pub mod backend;
pub mod color;
pub mod config;
pub mod console;
pub mod error;
pub mod event;
pub mod key;
pub mod screen;
pub mod tui;

pub use color::Color;
pub use config::ConsoleConfig;
pub use console::{restore_active_console, Console};
pub use error::ConsoleError;
pub use key::Key;
pub use tui::terminal_guard::{TerminalRestorer, TerminationSignal};

#[cfg(unix)]
pub use tui::terminal_guard::install_termination_signals;
