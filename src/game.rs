//! Frame driver
//!
//! Sits between the host's frame callback and the simulation: turns
//! timestamps into elapsed time, buffers input between frames, ticks and
//! renders.

use crate::consts::MAX_FRAME_DT;
use crate::settings::Settings;
use crate::sim::{
    Direction, Frame, GameConfig, GamePhase, GameState, GameSummary, TickInput, tick,
};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    /// Session is not running; wait for start/restart before scheduling again
    Halt,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    frame: Frame,
    input: TickInput,
    /// Timestamp of the previous frame (ms); None until the first frame
    last_time: Option<f64>,
}

impl Game {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let state = GameState::new(seed, config);
        let mut frame = Frame::default();
        state.render(&mut frame);
        Self {
            state,
            frame,
            input: TickInput::default(),
            last_time: None,
        }
    }

    pub fn from_settings(seed: u64, settings: &Settings) -> Self {
        Self::new(seed, settings.game_config())
    }

    /// Latest rendered frame
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn summary(&self) -> Option<GameSummary> {
        self.state.summary()
    }

    /// Queue a move for the next frame; dropped unless a session is running
    pub fn push_direction(&mut self, direction: Direction) {
        if self.state.session.is_running() {
            self.input.moves.push(direction);
        }
    }

    /// Start from the options screen
    pub fn start(&mut self) -> bool {
        self.begin(|state| state.start())
    }

    /// Play again after game over
    pub fn restart(&mut self) -> bool {
        self.begin(|state| state.restart())
    }

    /// Back to the options screen after game over
    pub fn return_to_menu(&mut self) -> bool {
        let changed = self.state.return_to_menu();
        if changed {
            self.state.render(&mut self.frame);
        }
        changed
    }

    pub fn configure(&mut self, config: GameConfig) -> bool {
        let changed = self.state.configure(config);
        if changed {
            self.state.render(&mut self.frame);
        }
        changed
    }

    fn begin(&mut self, transition: impl FnOnce(&mut GameState) -> bool) -> bool {
        if !transition(&mut self.state) {
            return false;
        }
        // New timer baseline: the next frame measures from itself
        self.last_time = None;
        self.input = TickInput::default();
        self.state.render(&mut self.frame);
        true
    }

    /// Run one display frame at host time `now_ms`
    pub fn frame_at(&mut self, now_ms: f64) -> FrameStatus {
        let dt = match self.last_time {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_time = Some(now_ms);

        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input, dt);
        self.state.render(&mut self.frame);

        if self.state.session.is_running() {
            FrameStatus::Continue
        } else {
            if let Some(summary) = self.state.summary() {
                log::info!("{}", summary.message());
            }
            FrameStatus::Halt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Cell, Enemy, Level};

    fn started_game() -> Game {
        let mut game = Game::new(11, GameConfig::default());
        assert!(game.start());
        game.state.enemies.clear();
        game
    }

    #[test]
    fn test_input_dropped_before_start() {
        let mut game = Game::new(11, GameConfig::default());
        game.push_direction(Direction::Up);
        assert_eq!(game.frame_at(0.0), FrameStatus::Halt);
        assert_eq!(game.state.player.cell, Cell::start());
    }

    #[test]
    fn test_first_frame_has_zero_dt() {
        let mut game = started_game();
        game.state.enemies.push(Enemy::new(-3.0, 1, 5.0));
        assert_eq!(game.frame_at(50_000.0), FrameStatus::Continue);
        assert_eq!(game.state.enemies[0].x, -3.0);
        assert_eq!(game.state.clock_ms, 0.0);
    }

    #[test]
    fn test_dt_is_measured_and_clamped() {
        let mut game = started_game();
        game.state.enemies.push(Enemy::new(-3.0, 1, 1.0));
        game.frame_at(1000.0);
        game.frame_at(1050.0);
        assert!((game.state.enemies[0].x - -2.95).abs() < 0.0001);

        // A long stall counts as one clamped frame
        game.frame_at(9000.0);
        assert!((game.state.enemies[0].x - -2.85).abs() < 0.0001);
    }

    #[test]
    fn test_queued_moves_apply_on_next_frame() {
        let mut game = started_game();
        game.push_direction(Direction::Up);
        game.push_direction(Direction::Left);
        assert_eq!(game.state.player.cell, Cell::start());
        game.frame_at(0.0);
        assert_eq!(game.state.player.cell, Cell::new(1, 4));
    }

    #[test]
    fn test_halts_on_game_over_and_restarts() {
        let mut game = started_game();
        game.state.session.health = 1;
        game.state.enemies.push(Enemy::new(2.0, 5, 0.0));
        assert_eq!(game.frame_at(0.0), FrameStatus::Halt);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.frame().hud.health, 0);
        assert!(game.summary().is_some());

        assert!(game.restart());
        assert_eq!(game.frame_at(10.0), FrameStatus::Continue);
        assert_eq!(game.frame().hud.health, 5);
    }

    #[test]
    fn test_menu_round_trip() {
        let mut game = started_game();
        game.state.session.health = 0;
        game.frame_at(0.0);
        assert!(game.return_to_menu());
        assert!(game.configure(GameConfig {
            level: Level::Easy,
            ..Default::default()
        }));
        assert!(game.start());
        assert_eq!(game.state.enemies.len(), 5);
    }
}
