use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ConsoleConfig;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Raw mode plus the optional screen/mouse/cursor modes from [`ConsoleConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosstermTerminalOps {
    alternate_screen: bool,
    mouse_capture: bool,
    hide_cursor: bool,
}

impl CrosstermTerminalOps {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            alternate_screen: config.alternate_screen,
            mouse_capture: config.mouse_capture,
            hide_cursor: config.hide_cursor,
        }
    }
}

impl Default for CrosstermTerminalOps {
    fn default() -> Self {
        Self::new(&ConsoleConfig::default())
    }
}

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::EnableMouseCapture,
            queue,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        let mut out = io::stdout();
        if self.alternate_screen {
            queue!(out, EnterAlternateScreen)?;
        }
        if self.mouse_capture {
            queue!(out, EnableMouseCapture)?;
        }
        if self.hide_cursor {
            queue!(out, cursor::Hide)?;
        }
        out.flush()
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::DisableMouseCapture,
            queue,
            style::{Attribute, ResetColor, SetAttribute},
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Best-effort restore: try all steps even if one fails.
        let mut first_err: Option<io::Error> = None;

        if let Err(err) = disable_raw_mode() {
            first_err.get_or_insert(err);
        }

        let mut out = io::stdout();
        let mut steps = || -> io::Result<()> {
            queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            if self.mouse_capture {
                queue!(out, DisableMouseCapture)?;
            }
            if self.hide_cursor {
                queue!(out, cursor::Show)?;
            }
            if self.alternate_screen {
                queue!(out, LeaveAlternateScreen)?;
            }
            out.flush()
        };
        if let Err(err) = steps() {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        tracing::debug!("restoring terminal mode");
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    /// Runs `ops.setup()`. A setup that fails partway is rolled back with a
    /// best-effort `ops.restore()` before the setup error is returned.
    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        if let Err(err) = ops.setup() {
            if let Err(restore_err) = ops.restore() {
                tracing::warn!(error = %restore_err, "failed to roll back terminal setup");
            }
            return Err(err);
        }
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to `tx`. If the program has not exited after a grace
/// period the terminal is restored and the process exits.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        for sig in signals.forever() {
            let signal = match sig {
                SIGINT => TerminationSignal::SigInt,
                SIGTERM => TerminationSignal::SigTerm,
                _ => continue,
            };

            tracing::info!(?signal, "termination signal received");
            if tx.send(signal).is_err() {
                tracing::warn!(?signal, "termination signal receiver is gone");
            }

            // Grace period: if the main loop is wedged, restore + hard-exit.
            std::thread::sleep(Duration::from_secs(2));
            if let Err(err) = restorer.restore() {
                tracing::warn!(error = %err, "failed to restore terminal");
            }
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
