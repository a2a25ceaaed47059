//! Bug Crossing - cross the road, dodge the bugs, grab the gems
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `game`: Frame driver that turns wall-clock frames into simulation ticks
//! - `settings`: Persisted player preferences (character, level)

pub mod game;
pub mod settings;
pub mod sim;

pub use game::{FrameStatus, Game};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board dimensions in cells
    pub const BOARD_COLS: u8 = 5;
    pub const BOARD_ROWS: u8 = 6;

    /// Goal (water) row
    pub const GOAL_ROW: u8 = 0;
    /// Player start cell (bottom grass row, middle column)
    pub const START_COL: u8 = 2;
    pub const START_ROW: u8 = BOARD_ROWS - 1;

    /// Tile size in pixels (canvas is 505x606)
    pub const TILE_WIDTH: f32 = 101.0;
    pub const TILE_HEIGHT: f32 = 83.0;
    /// Sprites are drawn slightly above their row so they sit on the tile
    pub const SPRITE_Y_OFFSET: f32 = -20.0;
    pub const CANVAS_WIDTH: u32 = 505;
    pub const CANVAS_HEIGHT: u32 = 606;

    /// Session start values
    pub const SCORE_START: u32 = 0;
    pub const HEALTH_START: u8 = 5;
    /// Points for reaching the goal row
    pub const CROSSING_POINTS: u32 = 1;

    /// Enemies wrap once their x reaches this column
    pub const ENEMY_WRAP_X: f32 = BOARD_COLS as f32;
    /// Furthest off-board start (enemies start in [-ENEMY_MAX_LEAD, -1])
    pub const ENEMY_MAX_LEAD: i32 = 50;
    /// Road rows enemies travel on
    pub const ENEMY_MIN_ROW: u8 = 1;
    pub const ENEMY_MAX_ROW: u8 = 3;
    /// Enemy speed range in columns per second
    pub const ENEMY_MIN_SPEED: u32 = 1;
    pub const ENEMY_MAX_SPEED: u32 = 5;

    /// Longest frame the driver will feed into one tick (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
