use super::*;
use crate::backend::test::TestBackend;
use crate::backend::CellStyle;
use crate::event::MouseEvent;

static TEST_LOCK: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    TEST_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl MockOps {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl TerminalOps for MockOps {
    fn setup(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        Ok(())
    }

    fn restore(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

struct NoTty;

impl TerminalOps for NoTty {
    fn setup(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "not a tty"))
    }

    fn restore(&self) -> std::io::Result<()> {
        Ok(())
    }
}

fn open(width: u16, height: u16) -> (Console, TestBackend, Arc<MockOps>) {
    let backend = TestBackend::new(width, height);
    let ops = Arc::new(MockOps::default());
    let console = Console::with_backend(ConsoleConfig::default(), backend.clone(), ops.clone())
        .expect("console");
    (console, backend, ops)
}

#[test]
fn second_console_is_rejected_while_first_is_alive() {
    let _serial = serial();
    let (console, _backend, _ops) = open(10, 4);

    let err = Console::with_backend(
        ConsoleConfig::default(),
        TestBackend::new(10, 4),
        Arc::new(MockOps::default()),
    )
    .unwrap_err();
    assert!(err.is_already_initialized());
    assert_eq!(err.to_string(), "Only one instance of Console can exist at once!");

    drop(console);
    let (_again, _backend, _ops) = open(10, 4);
}

#[test]
fn failed_setup_releases_the_lock() {
    let _serial = serial();
    let err = Console::with_backend(ConsoleConfig::default(), TestBackend::new(1, 1), Arc::new(NoTty))
        .unwrap_err();
    assert!(matches!(err, ConsoleError::Io(_)));

    let (_console, _backend, _ops) = open(1, 1);
}

#[test]
fn drop_restores_the_terminal_once() {
    let _serial = serial();
    let (console, _backend, ops) = open(10, 4);
    let restorer = console.restorer();
    restorer.restore().unwrap();
    drop(console);

    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn active_console_can_be_restored_from_a_hook() {
    let _serial = serial();
    let (console, _backend, ops) = open(10, 4);

    assert!(restore_active_console());
    assert!(console.restorer().is_restored());
    drop(console);

    assert_eq!(ops.calls(), vec!["setup", "restore"]);
    assert!(!restore_active_console());
}

#[test]
fn console_size_follows_the_backend() {
    let _serial = serial();
    let (console, backend, _ops) = open(80, 24);
    assert_eq!(console.get_console_size(), (80, 24));

    backend.resize(100, 30);
    assert!(!console.has_input().unwrap());
    assert_eq!(console.get_console_size(), (100, 30));
}

#[test]
fn keys_and_clicks_are_read_independently() {
    let _serial = serial();
    let (console, backend, _ops) = open(20, 5);

    assert!(!console.has_input().unwrap());
    assert_eq!(console.get_key().unwrap(), None);

    backend.push_click(3, 2);
    backend.push_key(Key::A);
    backend.push_key(Key::ENTER);

    assert!(console.has_input().unwrap());
    assert_eq!(console.get_key().unwrap(), Some(Key::A));
    assert_eq!(console.get_key().unwrap(), Some(Key::ENTER));
    assert_eq!(console.get_key().unwrap(), None);

    assert_eq!(console.get_mouse_pos_clicked().unwrap(), Some((3, 2)));
    assert_eq!(console.get_mouse_pos_clicked().unwrap(), None);
}

#[test]
fn non_left_clicks_are_not_reported() {
    let _serial = serial();
    let (console, backend, _ops) = open(20, 5);
    backend.push_event(ConsoleEvent::Mouse(MouseEvent::new(
        crate::event::MouseEventKind::Down(crate::event::MouseButton::Right),
        1,
        1,
    )));
    assert_eq!(console.get_mouse_pos_clicked().unwrap(), None);
}

#[test]
fn read_key_times_out_without_input() {
    let _serial = serial();
    let (console, backend, _ops) = open(20, 5);
    let start = Instant::now();
    assert_eq!(console.read_key(Duration::from_millis(5)).unwrap(), None);
    assert!(start.elapsed() >= Duration::from_millis(5));

    backend.push_key(Key::Q);
    assert_eq!(
        console.read_key(Duration::from_millis(5)).unwrap(),
        Some(Key::Q)
    );
}

#[test]
fn draw_text_uses_cursor_and_style() {
    let _serial = serial();
    let (console, backend, _ops) = open(20, 3);

    console.set_cursor_pos(2, 1);
    console.set_color(Color::Red, Color::Black);
    console.set_underline(true);
    console.draw_text("hey").unwrap();

    assert_eq!(backend.row_text(1), "  hey");
    let cell = backend.buffer().cell(2, 1).cloned().unwrap();
    assert_eq!(
        cell.style,
        CellStyle::new(Color::Red, Color::Black).underlined(true)
    );
    assert_eq!(console.cursor_pos(), (5, 1));
}

#[test]
fn inverted_colors_swap_foreground_and_background() {
    let _serial = serial();
    let (console, backend, _ops) = open(5, 1);

    console.set_color_invertible(Color::White, Color::Blue, true);
    console.draw_text("x").unwrap();
    let style = backend.buffer().cell(0, 0).unwrap().style;
    assert_eq!((style.fg, style.bg), (Color::Blue, Color::White));

    console.reset_color();
    console.set_cursor_pos(0, 0);
    console.draw_text("y").unwrap();
    let style = backend.buffer().cell(0, 0).unwrap().style;
    assert_eq!((style.fg, style.bg), (Color::Default, Color::Default));
}

#[test]
fn out_of_range_cursor_positions_are_ignored() {
    let _serial = serial();
    let (console, _backend, _ops) = open(5, 1);
    console.set_cursor_pos(3, 0);
    console.set_cursor_pos(usize::MAX, 0);
    assert_eq!(console.cursor_pos(), (3, 0));

    // Off-screen but representable positions are kept.
    console.set_cursor_pos(50, 50);
    assert_eq!(console.cursor_pos(), (50, 50));
    console.draw_text("hidden").unwrap();
}

#[test]
fn repaint_clears_and_homes_the_cursor() {
    let _serial = serial();
    let (console, backend, _ops) = open(10, 2);
    console.set_cursor_pos(4, 1);
    console.draw_text("abc").unwrap();

    console.repaint().unwrap();
    assert_eq!(backend.clear_count(), 1);
    assert_eq!(backend.row_text(1), "");
    assert_eq!(console.cursor_pos(), (0, 0));
}
