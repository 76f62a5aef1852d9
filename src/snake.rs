use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns the neighbouring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        Self {
            x: self.x + direction.x,
            y: self.y + direction.y,
        }
    }
}

/// Ordered snake body, head at the front.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a snake from explicit body segments (first is head).
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        debug_assert!(body.len() >= 2, "snake needs at least a head and a tail");

        Self { body }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment, the tail included, occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Prepends a new head.
    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Removes the tail segment.
    pub fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
