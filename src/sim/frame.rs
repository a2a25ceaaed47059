//! Per-frame presentation snapshot
//!
//! The simulation renders into plain data; turning it into pixels is the
//! front end's job.

use glam::Vec2;
use serde::Serialize;

use super::gem::GemKind;
use super::grid::board_to_screen;
use super::player::CharacterKind;
use super::state::GamePhase;

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Enemy,
    Character(CharacterKind),
    Gem(GemKind),
}

/// A drawable entity
#[derive(Debug, Clone, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Position in board units (columns, rows)
    pub board_pos: Vec2,
    /// Top-left canvas position in pixels
    pub screen_pos: Vec2,
    /// False for inactive gems
    pub visible: bool,
}

impl Sprite {
    pub fn new(kind: SpriteKind, board_pos: Vec2, visible: bool) -> Self {
        Self {
            kind,
            board_pos,
            screen_pos: board_to_screen(board_pos),
            visible,
        }
    }
}

/// Session readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub health: u8,
    pub phase: GamePhase,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score: 0,
            health: 0,
            phase: GamePhase::NotStarted,
        }
    }
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Default, Serialize)]
pub struct Frame {
    /// Sprites in draw order (gems, enemies, player)
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
}

impl Frame {
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.hud = Hud::default();
    }

    pub fn push(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Sprites that should actually be drawn
    pub fn visible(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter().filter(|s| s.visible)
    }
}
