use ratatui::style::Color;

use crate::input::Direction;
use crate::snake::Cell;

/// Side of the square board in logical units.
pub const DEFAULT_BOX_SIZE: u16 = 350;

/// Side of one grid cell in logical units.
pub const DEFAULT_CELL_SIZE: u16 = 15;

/// Interval between gameplay ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Score granted for each food eaten.
pub const FOOD_REWARD: u32 = 5;

/// Body of a freshly reset snake, head first.
pub const INITIAL_SNAKE: [Cell; 2] = [Cell { x: 5, y: 5 }, Cell { x: 4, y: 5 }];

/// Heading of a freshly reset snake.
pub const INITIAL_DIRECTION: Direction = Direction::RIGHT;

/// Terminal columns used to draw one grid cell so cells look square.
pub const COLUMNS_PER_CELL: u16 = 2;

/// Smallest grid that holds the initial snake with room for its first step.
pub const MIN_GRID_SIDE: u16 = 7;

/// Largest grid whose bordered board width still fits in a `u16`.
pub const MAX_GRID_SIDE: u16 = (u16::MAX - 2) / COLUMNS_PER_CELL;

/// Solid glyph for one grid cell.
pub const GLYPH_CELL: &str = "██";

/// Text written across the board once the game is over.
pub const GAME_OVER_LABEL: &str = "Game Over";

/// Logical board dimensions.
///
/// The playable grid is `box_size / cell_size` cells on each side, using
/// integer division (350 / 15 = 23).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardGeometry {
    pub box_size: u16,
    pub cell_size: u16,
}

impl BoardGeometry {
    /// Number of cells along each side of the grid.
    #[must_use]
    pub fn grid_side(self) -> u16 {
        self.box_size / self.cell_size
    }

    /// Returns true when `cell` lies inside `[0, side)` on both axes.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        let side = i32::from(self.grid_side());
        (0..side).contains(&cell.x) && (0..side).contains(&cell.y)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Fill colors used by the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub snake: Color,
    pub food: Color,
    pub board: Color,
    /// Color of the "Game Over" text drawn over the board.
    pub overlay: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            snake: Color::Green,
            food: Color::Red,
            board: Color::White,
            overlay: Color::Black,
        }
    }
}
