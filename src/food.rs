use rand::Rng;

use crate::config::{BoardGeometry, FOOD_REWARD};
use crate::snake::Cell;

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        FOOD_REWARD
    }

    /// Spawns food on a uniformly random cell of the whole grid.
    ///
    /// The snake body is not consulted, so food can land under the snake.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, geometry: BoardGeometry) -> Self {
        let side = i32::from(geometry.grid_side());
        Self::at(Cell {
            x: rng.gen_range(0..side),
            y: rng.gen_range(0..side),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::{BoardGeometry, FOOD_REWARD};
    use crate::snake::Cell;

    use super::Food;

    #[test]
    fn food_always_spawns_inside_the_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let geometry = BoardGeometry::default();

        for _ in 0..1_000 {
            let food = Food::spawn(&mut rng, geometry);
            assert!(geometry.contains(food.position));
        }
    }

    #[test]
    fn food_can_land_on_any_cell_of_a_small_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let geometry = BoardGeometry {
            box_size: 30,
            cell_size: 15,
        };

        let seen: HashSet<Cell> = (0..500)
            .map(|_| Food::spawn(&mut rng, geometry).position)
            .collect();

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn food_is_worth_the_fixed_reward() {
        assert_eq!(Food::at(Cell { x: 1, y: 1 }).points(), FOOD_REWARD);
    }
}
