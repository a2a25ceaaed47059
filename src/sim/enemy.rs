//! Bugs crawling left to right along the road rows

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Collides, Entity, UpdateCtx};
use super::frame::{Frame, Sprite, SpriteKind};
use super::player::Player;
use crate::consts::*;

/// A moving hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Continuous column position (negative while queued off-board)
    pub x: f32,
    pub row: u8,
    /// Columns per second
    pub speed: f32,
}

impl Enemy {
    pub fn new(x: f32, row: u8, speed: f32) -> Self {
        Self { x, row, speed }
    }

    /// Spawn off-board on a random road row with a random speed
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: offboard_x(rng),
            row: rng.random_range(ENEMY_MIN_ROW..=ENEMY_MAX_ROW),
            speed: rng.random_range(ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED) as f32,
        }
    }

    /// The column the enemy counts as occupying
    pub fn column(&self) -> i32 {
        self.x.ceil() as i32
    }
}

/// Random re-entry x in [-ENEMY_MAX_LEAD, -1]
fn offboard_x<R: Rng>(rng: &mut R) -> f32 {
    -(rng.random_range(1..=ENEMY_MAX_LEAD) as f32)
}

impl Entity for Enemy {
    fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        if self.x < ENEMY_WRAP_X {
            self.x += self.speed * ctx.dt;
        } else {
            // Row and speed are kept on wrap
            self.x = offboard_x(&mut *ctx.rng);
        }
    }

    fn render(&self, frame: &mut Frame) {
        frame.push(Sprite::new(
            SpriteKind::Enemy,
            Vec2::new(self.x, self.row as f32),
            true,
        ));
    }
}

impl Collides for Enemy {
    fn collides_with(&self, player: &Player) -> bool {
        self.column() == i32::from(player.cell.col) && self.row == player.cell.row
    }
}
