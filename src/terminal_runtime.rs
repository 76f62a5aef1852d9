use std::io;
use std::panic;
use std::sync::Once;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the game loop.
pub type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// The game view: raw mode, hidden cursor and the alternate screen.
///
/// The shell gets its normal screen back when this is dropped or when the
/// process panics while it is alive.
pub struct Screen {
    terminal: GameTerminal,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                leave_game_view();
                previous(info);
            }));
        });

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
            .map(|terminal| Self { terminal })
            .inspect_err(|_| leave_game_view())
    }

    pub fn terminal_mut(&mut self) -> &mut GameTerminal {
        &mut self.terminal
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        leave_game_view();
    }
}

/// Undoes every step of [`Screen::enter`]; each step is attempted even if an
/// earlier one fails.
fn leave_game_view() {
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}
