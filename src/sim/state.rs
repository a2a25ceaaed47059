//! Game state and session types
//!
//! Score and health live in `Session`, owned by `GameState` together with
//! every entity and the seeded RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::entity::Entity;
use super::frame::{Frame, Hud};
use super::gem::{Gem, HEART_GEM, SCORE_GEM};
use super::player::{CharacterKind, Player};
use crate::consts::*;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start command (options screen)
    NotStarted,
    /// Active gameplay
    Running,
    /// Health ran out
    GameOver,
}

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    Easy,
    Normal,
    #[default]
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Normal, Level::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Normal => "Normal",
            Level::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Level::Easy),
            "normal" | "medium" => Some(Level::Normal),
            "hard" => Some(Level::Hard),
            _ => None,
        }
    }

    /// Bugs on the road for this level
    pub fn enemy_count(&self) -> usize {
        match self {
            Level::Easy => 5,
            Level::Normal => 10,
            Level::Hard => 15,
        }
    }

    /// Next level in the selection carousel (wraps)
    pub fn next(&self) -> Self {
        match self {
            Level::Easy => Level::Normal,
            Level::Normal => Level::Hard,
            Level::Hard => Level::Easy,
        }
    }
}

/// Choices made before a session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub character: CharacterKind,
    pub level: Level,
}

/// Score, health and phase of the current play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    pub health: u8,
    pub phase: GamePhase,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: SCORE_START,
            health: HEALTH_START,
            phase: GamePhase::NotStarted,
        }
    }
}

impl Session {
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn health_full(&self) -> bool {
        self.health >= HEALTH_START
    }
}

/// Terminal readout shown on the game over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub score: u32,
    pub level: Level,
    pub character: CharacterKind,
}

impl GameSummary {
    /// "You scored 1 point" / "You scored 7 points"
    pub fn message(&self) -> String {
        let unit = if self.score == 1 { "point" } else { "points" };
        format!("You scored {} {}", self.score, unit)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub session: Session,
    /// Simulation clock (ms), advanced only by ticks
    pub clock_ms: f64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub score_gem: Gem,
    pub heart_gem: Gem,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state waiting for the start command
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let score_gem = Gem::new(SCORE_GEM, &mut rng);
        let heart_gem = Gem::new(HEART_GEM, &mut rng);
        let mut state = Self {
            seed,
            config,
            session: Session::default(),
            clock_ms: 0.0,
            player: Player::new(config.character),
            enemies: Vec::new(),
            score_gem,
            heart_gem,
            rng,
        };
        state.spawn_enemies();
        state
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Fresh enemies, gems and player for the configured level and character
    pub fn reset_entities(&mut self) {
        self.clock_ms = 0.0;
        self.player = Player::new(self.config.character);
        self.score_gem = Gem::new(SCORE_GEM, &mut self.rng);
        self.heart_gem = Gem::new(HEART_GEM, &mut self.rng);
        self.spawn_enemies();
    }

    fn spawn_enemies(&mut self) {
        let count = self.config.level.enemy_count();
        self.enemies = (0..count).map(|_| Enemy::spawn(&mut self.rng)).collect();
    }

    /// NotStarted -> Running
    pub fn start(&mut self) -> bool {
        if self.session.phase != GamePhase::NotStarted {
            return false;
        }
        self.begin_session();
        log::info!(
            "Session started: {} as {}",
            self.config.level.as_str(),
            self.config.character.as_str()
        );
        true
    }

    /// GameOver -> Running with everything re-initialised
    pub fn restart(&mut self) -> bool {
        if self.session.phase != GamePhase::GameOver {
            return false;
        }
        self.begin_session();
        log::info!("Session restarted");
        true
    }

    /// GameOver -> NotStarted so character and level can be chosen again
    pub fn return_to_menu(&mut self) -> bool {
        if self.session.phase != GamePhase::GameOver {
            return false;
        }
        self.session = Session::default();
        self.reset_entities();
        true
    }

    /// Change character and level; refused while a session is running
    pub fn configure(&mut self, config: GameConfig) -> bool {
        if self.session.is_running() {
            log::warn!("Ignoring configuration change during a running session");
            return false;
        }
        self.config = config;
        self.player.character = config.character;
        true
    }

    fn begin_session(&mut self) {
        self.session = Session {
            score: SCORE_START,
            health: HEALTH_START,
            phase: GamePhase::Running,
        };
        self.reset_entities();
    }

    /// Final score, only once the session is over
    pub fn summary(&self) -> Option<GameSummary> {
        (self.session.phase == GamePhase::GameOver).then_some(GameSummary {
            score: self.session.score,
            level: self.config.level,
            character: self.config.character,
        })
    }

    /// Draw gems, enemies, then the player; HUD last
    pub fn render(&self, frame: &mut Frame) {
        frame.clear();
        if self.session.phase != GamePhase::NotStarted {
            self.score_gem.render(frame);
            self.heart_gem.render(frame);
            for enemy in &self.enemies {
                enemy.render(frame);
            }
            self.player.render(frame);
        }
        frame.hud = Hud {
            score: self.session.score,
            health: self.session.health,
            phase: self.session.phase,
        };
    }
}
