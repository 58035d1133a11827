//! Centers a line of text and cycles its color until Enter is pressed.

use std::process::ExitCode;
use std::thread::sleep;
use std::time::Duration;

use console_lib::{Color, Console, ConsoleError, Key};

mod logging;

const TEXT: &str = "An example text";
const TICK: Duration = Duration::from_millis(50);
const TICKS_PER_COLOR: usize = 10;

const COLORS: [Color; 7] = [
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Red,
    Color::Pink,
    Color::Yellow,
    Color::White,
];

fn main() -> ExitCode {
    let logging = logging::init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "draw_colored_text failed");
            eprintln!("draw_colored_text: {err}");
            if let Some(logging) = &logging {
                eprintln!("logs: {}", logging.log_dir().display());
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, ConsoleError> {
    let console = Console::new()?;

    #[cfg(unix)]
    let signals = {
        let (tx, rx) = std::sync::mpsc::channel();
        let _handle = console_lib::install_termination_signals(console.restorer(), tx)?;
        rx
    };

    let mut color_index = 0;
    let mut ticks = 0_usize;

    loop {
        #[cfg(unix)]
        if let Ok(signal) = signals.try_recv() {
            return Ok(ExitCode::from(signal.exit_code() as u8));
        }

        while let Some(key) = console.get_key()? {
            if key == Key::ENTER {
                return Ok(ExitCode::SUCCESS);
            }
        }

        if let Some((x, y)) = console.get_mouse_pos_clicked()? {
            tracing::debug!(x, y, "click");
        }

        if ticks % TICKS_PER_COLOR == 0 {
            console.repaint()?;
            console.set_color(COLORS[color_index], Color::Default);
            color_index = (color_index + 1) % COLORS.len();

            let (width, height) = console.get_console_size();
            let x = width.saturating_sub(TEXT.len()) / 2;
            let y = height / 2;
            console.set_cursor_pos(x, y);
            console.draw_text(TEXT)?;
        }

        sleep(TICK);
        ticks += 1;
    }
}
