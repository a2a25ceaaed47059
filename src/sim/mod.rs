//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Simulation clock advanced only by tick dt
//! - Seeded RNG only
//! - Fixed update order (enemies, gems, player)
//! - No rendering or platform dependencies

pub mod enemy;
pub mod entity;
pub mod frame;
pub mod gem;
pub mod grid;
pub mod player;
pub mod rules;
pub mod state;
pub mod tick;
pub mod timer;

pub use enemy::Enemy;
pub use entity::{Collides, Entity, UpdateCtx};
pub use frame::{Frame, Hud, Sprite, SpriteKind};
pub use gem::{Gem, GemKind, GemSpec, HEART_GEM, SCORE_GEM};
pub use grid::Cell;
pub use player::{CharacterKind, Direction, MoveOutcome, Player};
pub use state::{GameConfig, GamePhase, GameState, GameSummary, Level, Session};
pub use tick::{TickInput, tick};
pub use timer::RespawnTimer;
