use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::{BoardGeometry, INITIAL_DIRECTION, INITIAL_SNAKE};
use crate::food::Food;
use crate::input::{Arrow, Direction, steer};
use crate::snake::Snake;

/// High-level lifecycle of one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Lifecycle {
    /// Waiting for the player to press start.
    Idle,
    Running,
    Over,
}

/// What ended the last game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one call to [`GameState::advance`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Skipped,
    /// The snake translated by one cell.
    Moved,
    /// The snake ate the food and grew by one cell.
    Ate,
    HitWall,
    HitSelf,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Food,
    pub score: u32,
    pub high_score: u32,
    pub death_reason: Option<DeathReason>,
    lifecycle: Lifecycle,
    geometry: BoardGeometry,
    rng: StdRng,
}

impl GameState {
    /// Creates an idle game with entropy-seeded food placement.
    #[must_use]
    pub fn new(geometry: BoardGeometry) -> Self {
        Self::with_rng(geometry, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(geometry: BoardGeometry, seed: u64) -> Self {
        Self::with_rng(geometry, StdRng::seed_from_u64(seed))
    }

    fn with_rng(geometry: BoardGeometry, mut rng: StdRng) -> Self {
        let food = Food::spawn(&mut rng, geometry);

        Self {
            snake: Snake::from_segments(INITIAL_SNAKE),
            direction: INITIAL_DIRECTION,
            food,
            score: 0,
            high_score: 0,
            death_reason: None,
            lifecycle: Lifecycle::Idle,
            geometry,
            rng,
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// True once the game has left idle, including after game over.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.lifecycle != Lifecycle::Idle
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.lifecycle == Lifecycle::Over
    }

    /// Moves from idle to running. Returns false in any other state.
    pub fn start(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Idle {
            return false;
        }

        self.lifecycle = Lifecycle::Running;
        info!(high_score = self.high_score, "game started");
        true
    }

    /// Resets everything except the high score and returns to idle.
    pub fn restart(&mut self) {
        self.snake = Snake::from_segments(INITIAL_SNAKE);
        self.direction = INITIAL_DIRECTION;
        self.food = Food::spawn(&mut self.rng, self.geometry);
        self.score = 0;
        self.death_reason = None;
        self.lifecycle = Lifecycle::Idle;
        info!(high_score = self.high_score, "game reset");
    }

    /// Applies one arrow key. Returns true when the heading changed.
    pub fn set_direction(&mut self, arrow: Arrow) -> bool {
        if !self.is_running() {
            return false;
        }

        match steer(self.direction, arrow) {
            Some(direction) => {
                self.direction = direction;
                true
            }
            None => false,
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn advance(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Skipped;
        }

        let next_head = self.snake.head().step(self.direction);

        if !self.geometry.contains(next_head) {
            self.finish(DeathReason::WallCollision);
            return TickOutcome::HitWall;
        }

        if self.snake.occupies(next_head) {
            self.finish(DeathReason::SelfCollision);
            return TickOutcome::HitSelf;
        }

        self.snake.push_head(next_head);

        if next_head == self.food.position {
            self.score += self.food.points();
            self.high_score = self.high_score.max(self.score);
            self.food = Food::spawn(&mut self.rng, self.geometry);
            debug!(score = self.score, length = self.snake.len(), "food eaten");
            return TickOutcome::Ate;
        }

        self.snake.drop_tail();
        TickOutcome::Moved
    }

    fn finish(&mut self, reason: DeathReason) {
        self.lifecycle = Lifecycle::Over;
        self.death_reason = Some(reason);
        info!(
            score = self.score,
            high_score = self.high_score,
            cause = ?reason,
            "game over"
        );
    }
}
