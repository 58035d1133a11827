//! The single live console session.

use std::cell::RefCell;
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use std::time::{Duration, Instant};

#[cfg(feature = "custom_panic_hook")]
use std::sync::Once;

use crate::backend::terminal::CrosstermBackend;
use crate::backend::Backend;
use crate::color::Color;
use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, Result};
use crate::event::{ConsoleEvent, InputQueue};
use crate::key::Key;
use crate::screen::Screen;
use crate::tui::terminal_guard::{
    CrosstermTerminalOps, TerminalGuard, TerminalOps, TerminalRestorer,
};

static CONSOLE_LOCK: Mutex<()> = Mutex::new(());

/// Restorer of the console that is currently alive, for the panic hook.
static ACTIVE_RESTORER: Mutex<Option<TerminalRestorer>> = Mutex::new(None);

#[cfg(feature = "custom_panic_hook")]
static PANIC_HOOK: Once = Once::new();

/// Owns the terminal while it is in interactive mode.
///
/// Creating a console switches the terminal to raw mode (no echo, no line
/// buffering), and by default to the alternate screen with mouse capture and a
/// hidden cursor. Dropping it restores the terminal to the state it was in
/// before.
///
/// Only one console can exist at a time; [`Console::new`] fails with
/// [`ConsoleError::AlreadyInitialized`] while another one is alive.
///
/// # Panics while the console is active
///
/// Without intervention a panic message would be printed into the alternate
/// screen and lost when the terminal is restored during unwinding. With the
/// `custom_panic_hook` feature (enabled by default) the first console installs a
/// process-wide panic hook that restores the terminal before delegating to the
/// previously installed hook, so the message ends up on the normal screen.
pub struct Console {
    inner: RefCell<Inner>,
    guard: TerminalGuard,
    _lock: MutexGuard<'static, ()>,
}

struct Inner {
    backend: Box<dyn Backend>,
    screen: Screen,
    input: InputQueue,
}

impl Inner {
    /// Moves every event the backend already has into the input queue.
    fn pump(&mut self) -> Result<()> {
        while let Some(event) = self.backend.poll_event(Duration::ZERO)? {
            self.accept(event);
        }
        Ok(())
    }

    fn accept(&mut self, event: ConsoleEvent) {
        self.input.push(event);
        if let Some((width, height)) = self.input.take_resize() {
            tracing::debug!(width, height, "console resized");
            self.screen.resize(width, height);
        }
    }
}

impl Console {
    /// Creates the console on stdout, configured from the environment
    /// (see [`ConsoleConfig::from_env`]).
    pub fn new() -> Result<Self> {
        Self::with_config(ConsoleConfig::from_env())
    }

    pub fn with_config(config: ConsoleConfig) -> Result<Self> {
        let ops = Arc::new(CrosstermTerminalOps::new(&config));
        Self::with_backend(config, CrosstermBackend::stdout(), ops)
    }

    /// Creates a console on an arbitrary backend, e.g.
    /// [`TestBackend`](crate::backend::test::TestBackend) for headless use.
    pub fn with_backend(
        config: ConsoleConfig,
        backend: impl Backend + 'static,
        ops: Arc<dyn TerminalOps>,
    ) -> Result<Self> {
        let lock = acquire_lock()?;
        let guard = TerminalGuard::with_ops(ops)?;
        let (width, height) = backend.size()?;

        set_active_restorer(Some(guard.restorer()));
        #[cfg(feature = "custom_panic_hook")]
        install_panic_hook();

        tracing::debug!(width, height, ?config, "console initialized");

        Ok(Self {
            inner: RefCell::new(Inner {
                backend: Box::new(backend),
                screen: Screen::new(width, height, config.effective_tab_width()),
                input: InputQueue::new(),
            }),
            guard,
            _lock: lock,
        })
    }

    /// Clears the screen and moves the cursor to the top left corner.
    pub fn repaint(&self) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        let cmd = inner.screen.clear();
        inner.backend.draw(&[cmd])?;
        Ok(())
    }

    /// Size of the console in characters as (columns, rows).
    ///
    /// Resizes are picked up while input is read, so the value can change after
    /// any of the input methods.
    pub fn get_console_size(&self) -> (usize, usize) {
        let (width, height) = self.inner.borrow().screen.size();
        (width as usize, height as usize)
    }

    /// Checks without blocking whether a key press is waiting.
    pub fn has_input(&self) -> Result<bool> {
        let mut inner = self.inner.borrow_mut();
        inner.pump()?;
        Ok(inner.input.has_key())
    }

    /// Returns the oldest pending key press, or `None` without blocking.
    pub fn get_key(&self) -> Result<Option<Key>> {
        let mut inner = self.inner.borrow_mut();
        inner.pump()?;
        Ok(inner.input.pop_key())
    }

    /// Waits up to `timeout` for a key press.
    pub fn read_key(&self, timeout: Duration) -> Result<Option<Key>> {
        let deadline = Instant::now() + timeout;
        let mut inner = self.inner.borrow_mut();
        loop {
            inner.pump()?;
            if let Some(key) = inner.input.pop_key() {
                return Ok(Some(key));
            }

            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            if let Some(event) = inner.backend.poll_event(deadline - now)? {
                inner.accept(event);
            }
        }
    }

    /// Position of the last left click as (x, y) in character cells, or `None`
    /// if there was no left click since the previous call.
    ///
    /// Clicks are tracked separately from keys; skipping this call never holds
    /// back key input.
    pub fn get_mouse_pos_clicked(&self) -> Result<Option<(usize, usize)>> {
        let mut inner = self.inner.borrow_mut();
        inner.pump()?;
        Ok(inner
            .input
            .take_click()
            .map(|(column, row)| (column as usize, row as usize)))
    }

    /// Draws text at the cursor and moves the cursor behind it.
    ///
    /// Characters outside the console are not drawn. `\n` continues at the start
    /// of the next row, `\t` advances to the next tab stop and other control
    /// characters are ignored.
    pub fn draw_text(&self, text: impl AsRef<str>) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        let cmds = inner.screen.layout_text(text.as_ref());
        if !cmds.is_empty() {
            inner.backend.draw(&cmds)?;
        }
        Ok(())
    }

    pub fn set_color(&self, fg: Color, bg: Color) {
        let mut inner = self.inner.borrow_mut();
        let style = inner.screen.style_mut();
        style.fg = fg;
        style.bg = bg;
    }

    /// Like [`Console::set_color`], with foreground and background swapped if
    /// `inverted` is true.
    pub fn set_color_invertible(&self, fg: Color, bg: Color, inverted: bool) {
        if inverted {
            self.set_color(bg, fg);
        } else {
            self.set_color(fg, bg);
        }
    }

    /// Resets foreground and background to [`Color::Default`].
    pub fn reset_color(&self) {
        self.set_color(Color::Default, Color::Default);
    }

    pub fn set_underline(&self, underline: bool) {
        self.inner.borrow_mut().screen.style_mut().underline = underline;
    }

    /// Moves the cursor. Positions beyond the terminal coordinate range are
    /// ignored; positions outside the visible area are kept and clip drawing.
    pub fn set_cursor_pos(&self, x: usize, y: usize) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            tracing::trace!(x, y, "ignoring unrepresentable cursor position");
            return;
        };
        self.inner.borrow_mut().screen.move_to(x, y);
    }

    pub fn cursor_pos(&self) -> (usize, usize) {
        let (x, y) = self.inner.borrow().screen.cursor();
        (x as usize, y as usize)
    }

    /// Handle that restores the terminal from other threads (signal handlers).
    pub fn restorer(&self) -> TerminalRestorer {
        self.guard.restorer()
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        set_active_restorer(None);
        // A panic hook or signal handler may already have restored the terminal;
        // the restorer only runs once.
        if let Err(err) = self.guard.restorer().restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
        tracing::debug!("console released");
    }
}

fn acquire_lock() -> Result<MutexGuard<'static, ()>> {
    match CONSOLE_LOCK.try_lock() {
        Ok(lock) => Ok(lock),
        // A console dropped during unwinding poisons the lock; the terminal was
        // still restored, so the lock is safe to reuse.
        Err(TryLockError::Poisoned(poisoned)) => Ok(poisoned.into_inner()),
        Err(TryLockError::WouldBlock) => Err(ConsoleError::AlreadyInitialized),
    }
}

fn set_active_restorer(restorer: Option<TerminalRestorer>) {
    let mut slot = ACTIVE_RESTORER
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *slot = restorer;
}

/// Restores the terminal of the live console, if there is one.
///
/// Returns whether a console was active. Meant for custom panic hooks; never
/// blocks, so it is safe to call while the console itself is being used.
pub fn restore_active_console() -> bool {
    let slot = match ACTIVE_RESTORER.try_lock() {
        Ok(slot) => slot,
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        Err(TryLockError::WouldBlock) => return false,
    };
    let Some(restorer) = slot.as_ref() else {
        return false;
    };
    if let Err(err) = restorer.restore() {
        tracing::warn!(error = %err, "failed to restore terminal");
    }
    true
}

#[cfg(feature = "custom_panic_hook")]
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            if restore_active_console() {
                tracing::error!(panic = %panic_info, "panic while console was active");
            }
            previous(panic_info);
        }));
    });
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Console");
        if let Ok(inner) = self.inner.try_borrow() {
            s.field("size", &inner.screen.size())
                .field("cursor", &inner.screen.cursor())
                .field("style", &inner.screen.style());
        }
        s.finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/unit/console.rs"]
mod tests;
