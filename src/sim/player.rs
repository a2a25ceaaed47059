//! The player-controlled character

use serde::{Deserialize, Serialize};

use super::entity::{Entity, UpdateCtx};
use super::frame::{Frame, Sprite, SpriteKind};
use super::grid::Cell;
use crate::consts::*;

/// Selectable character sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacterKind {
    #[default]
    Boy,
    CatGirl,
    HornGirl,
    PinkGirl,
    PrincessGirl,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 5] = [
        CharacterKind::Boy,
        CharacterKind::CatGirl,
        CharacterKind::HornGirl,
        CharacterKind::PinkGirl,
        CharacterKind::PrincessGirl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterKind::Boy => "Boy",
            CharacterKind::CatGirl => "Cat Girl",
            CharacterKind::HornGirl => "Horn Girl",
            CharacterKind::PinkGirl => "Pink Girl",
            CharacterKind::PrincessGirl => "Princess Girl",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next character in the selection carousel (wraps)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Movement commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// What a move did to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Move would leave the board; ignored
    Blocked,
    /// Stepped from row 1 onto the goal row
    Crossed,
}

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub cell: Cell,
    pub character: CharacterKind,
}

impl Player {
    pub fn new(character: CharacterKind) -> Self {
        Self {
            cell: Cell::start(),
            character,
        }
    }

    /// Apply one direction command, clamped to the board
    ///
    /// A crossing leaves the player on the goal row; the caller resets them
    /// and awards the point.
    pub fn handle_input(&mut self, direction: Direction) -> MoveOutcome {
        let cell = &mut self.cell;
        match direction {
            Direction::Left if cell.col > 0 => cell.col -= 1,
            Direction::Right if cell.col < BOARD_COLS - 1 => cell.col += 1,
            Direction::Down if cell.row < BOARD_ROWS - 1 => cell.row += 1,
            Direction::Up if cell.row == GOAL_ROW + 1 => {
                cell.row = GOAL_ROW;
                return MoveOutcome::Crossed;
            }
            Direction::Up if cell.row > GOAL_ROW + 1 => cell.row -= 1,
            _ => return MoveOutcome::Blocked,
        }
        MoveOutcome::Moved
    }

    /// Snap back to the start cell while still alive
    pub fn reset(&mut self, health: u8) {
        if health > 0 {
            self.cell = Cell::start();
        }
    }
}

impl Entity for Player {
    // Moves only on input
    fn update(&mut self, _ctx: &mut UpdateCtx<'_>) {}

    fn render(&self, frame: &mut Frame) {
        frame.push(Sprite::new(
            SpriteKind::Character(self.character),
            self.cell.board_pos(),
            true,
        ));
    }
}
