//! Board geometry
//!
//! The board is a fixed 5x6 grid of tiles. Row 0 is the water (goal), rows 1-3
//! are the road, rows 4-5 are grass. Entities live either on a discrete cell
//! (player, gems) or on a continuous column position within a row (enemies).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Interior bounds where gems may appear
pub const INTERIOR_MIN_COL: u8 = 1;
pub const INTERIOR_MAX_COL: u8 = BOARD_COLS - 1;
pub const INTERIOR_MIN_ROW: u8 = 1;
pub const INTERIOR_MAX_ROW: u8 = 3;

/// A discrete board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Player start cell
    pub const fn start() -> Self {
        Self::new(START_COL, START_ROW)
    }

    pub fn in_bounds(&self) -> bool {
        self.col < BOARD_COLS && self.row < BOARD_ROWS
    }

    /// True for cells off the goal row and off the grass
    pub fn is_interior(&self) -> bool {
        (INTERIOR_MIN_COL..=INTERIOR_MAX_COL).contains(&self.col)
            && (INTERIOR_MIN_ROW..=INTERIOR_MAX_ROW).contains(&self.row)
    }

    /// Position in board units (columns, rows)
    pub fn board_pos(&self) -> Vec2 {
        Vec2::new(self.col as f32, self.row as f32)
    }
}

/// Pick a uniformly random interior cell
pub fn random_interior_cell<R: Rng>(rng: &mut R) -> Cell {
    Cell {
        col: rng.random_range(INTERIOR_MIN_COL..=INTERIOR_MAX_COL),
        row: rng.random_range(INTERIOR_MIN_ROW..=INTERIOR_MAX_ROW),
    }
}

/// Convert a board position (column units, row) to canvas pixels
#[inline]
pub fn board_to_screen(pos: Vec2) -> Vec2 {
    Vec2::new(
        pos.x * TILE_WIDTH,
        pos.y * TILE_HEIGHT + SPRITE_Y_OFFSET,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_start_cell() {
        let start = Cell::start();
        assert_eq!(start, Cell::new(2, 5));
        assert!(start.in_bounds());
        assert!(!start.is_interior());
    }

    #[test]
    fn test_interior_excludes_goal_and_grass() {
        assert!(Cell::new(1, 1).is_interior());
        assert!(Cell::new(4, 3).is_interior());
        assert!(!Cell::new(0, 2).is_interior());
        assert!(!Cell::new(2, 0).is_interior());
        assert!(!Cell::new(2, 4).is_interior());
        assert!(!Cell::new(2, 5).is_interior());
    }

    #[test]
    fn test_board_to_screen() {
        let screen = board_to_screen(Vec2::new(2.0, 5.0));
        assert!((screen.x - 202.0).abs() < 0.001);
        assert!((screen.y - 395.0).abs() < 0.001);
    }

    proptest! {
        #[test]
        fn random_interior_cells_stay_interior(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..32 {
                let cell = random_interior_cell(&mut rng);
                prop_assert!(cell.is_interior());
                prop_assert!(cell.in_bounds());
            }
        }
    }
}
