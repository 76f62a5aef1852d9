use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Unit movement vector on the grid. `y` grows downward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Direction {
    pub x: i32,
    pub y: i32,
}

impl Direction {
    pub const UP: Self = Self { x: 0, y: -1 };
    pub const DOWN: Self = Self { x: 0, y: 1 };
    pub const LEFT: Self = Self { x: -1, y: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };
}

/// One of the four directional keys.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

impl Arrow {
    /// Direction this key asks for.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::Up => Direction::UP,
            Self::Down => Direction::DOWN,
            Self::Left => Direction::LEFT,
            Self::Right => Direction::RIGHT,
        }
    }

    /// Maps an arrow key code; every other key yields `None`.
    #[must_use]
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// Returns the new direction for `arrow`, or `None` when the key is ignored.
///
/// A vertical key is accepted only while the current direction has no
/// vertical component, a horizontal key only while it has no horizontal
/// component. Only the requested axis is inspected.
#[must_use]
pub fn steer(current: Direction, arrow: Arrow) -> Option<Direction> {
    let axis_busy = match arrow {
        Arrow::Up | Arrow::Down => current.y != 0,
        Arrow::Left | Arrow::Right => current.x != 0,
    };

    if axis_busy {
        None
    } else {
        Some(arrow.direction())
    }
}

/// Host-level commands that are not steering.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Activates the visible button (Start or Restart).
    Confirm,
    Quit,
}

/// Maps a key press to a host command.
#[must_use]
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        _ => None,
    }
}
