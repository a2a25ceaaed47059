//! Timed collectibles
//!
//! Both gems are the same struct; what sets them apart is their `GemSpec`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Collides, Entity, UpdateCtx};
use super::frame::{Frame, Sprite, SpriteKind};
use super::grid::{Cell, random_interior_cell};
use super::player::Player;
use super::timer::RespawnTimer;

/// Sprite tag only; behaviour comes from the `GemSpec` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GemKind {
    Score,
    Heart,
}

/// Gem configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GemSpec {
    pub kind: GemKind,
    pub points: u32,
    pub health_bonus: u8,
    pub starts_active: bool,
    pub respawn_delay_ms: f64,
}

/// Blue gem: extra points, back three seconds after pickup
pub const SCORE_GEM: GemSpec = GemSpec {
    kind: GemKind::Score,
    points: 5,
    health_bonus: 0,
    starts_active: true,
    respawn_delay_ms: 3000.0,
};

/// Heart: one health, only offered while below max health
pub const HEART_GEM: GemSpec = GemSpec {
    kind: GemKind::Heart,
    points: 0,
    health_bonus: 1,
    starts_active: false,
    respawn_delay_ms: 10_000.0,
};

/// A collectible sitting on an interior cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gem {
    pub spec: GemSpec,
    pub cell: Cell,
    pub active: bool,
    timer: RespawnTimer,
}

impl Gem {
    /// Place a gem on a random interior cell, active per its `GemSpec`, no timer pending
    pub fn new<R: Rng>(spec: GemSpec, rng: &mut R) -> Self {
        Self {
            spec,
            cell: random_interior_cell(rng),
            active: spec.starts_active,
            timer: RespawnTimer::default(),
        }
    }

    pub fn kind(&self) -> GemKind {
        self.spec.kind
    }

    /// Gems that give health are withheld while health is full
    pub fn restores_health(&self) -> bool {
        self.spec.health_bonus > 0
    }

    pub fn respawn_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Simulation time the pending respawn fires at
    pub fn respawn_at(&self) -> Option<f64> {
        self.timer.wake_at()
    }

    pub fn cancel_respawn(&mut self) {
        self.timer.cancel();
    }

    /// Move to a fresh interior cell and schedule activation
    ///
    /// Any pending respawn is replaced, never duplicated.
    pub fn regenerate<R: Rng>(&mut self, now_ms: f64, rng: &mut R) {
        self.timer.cancel();
        self.cell = random_interior_cell(rng);
        self.timer.schedule(now_ms, self.spec.respawn_delay_ms);
        log::debug!(
            "{:?} gem respawning at ({}, {}) in {} ms",
            self.spec.kind,
            self.cell.col,
            self.cell.row,
            self.spec.respawn_delay_ms
        );
    }
}

impl Entity for Gem {
    fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        if self.timer.fire(ctx.now_ms) {
            self.active = true;
            log::debug!("{:?} gem active", self.spec.kind);
        }
    }

    fn render(&self, frame: &mut Frame) {
        frame.push(Sprite::new(
            SpriteKind::Gem(self.spec.kind),
            self.cell.board_pos(),
            self.active,
        ));
    }
}

impl Collides for Gem {
    /// Position only; the active flag is checked by the pickup rule
    fn collides_with(&self, player: &Player) -> bool {
        self.cell == player.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::player::CharacterKind;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_initial_state_follows_gem_config() {
        let mut rng = Pcg32::seed_from_u64(3);
        let gem = Gem::new(SCORE_GEM, &mut rng);
        let heart = Gem::new(HEART_GEM, &mut rng);

        assert!(gem.active);
        assert!(!heart.active);
        assert!(!gem.restores_health());
        assert!(heart.restores_health());
        assert!(!gem.respawn_pending());
        assert!(gem.cell.is_interior());
    }

    #[test]
    fn test_timer_activates_gem() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut gem = Gem::new(SCORE_GEM, &mut rng);
        gem.active = false;
        gem.regenerate(1000.0, &mut rng);
        assert_eq!(gem.respawn_at(), Some(4000.0));

        let mut ctx = UpdateCtx { dt: 0.0, now_ms: 3999.0, rng: &mut rng };
        gem.update(&mut ctx);
        assert!(!gem.active);

        ctx.now_ms = 4000.0;
        gem.update(&mut ctx);
        assert!(gem.active);
        assert!(!gem.respawn_pending());
    }

    #[test]
    fn test_regenerate_replaces_pending_timer() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut heart = Gem::new(HEART_GEM, &mut rng);
        heart.regenerate(0.0, &mut rng);
        heart.regenerate(5000.0, &mut rng);
        assert_eq!(heart.respawn_at(), Some(15_000.0));
    }

    #[test]
    fn test_collision_ignores_active_flag() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut gem = Gem::new(SCORE_GEM, &mut rng);
        gem.active = false;
        let mut player = Player::new(CharacterKind::Boy);
        player.cell = gem.cell;
        assert!(gem.collides_with(&player));
    }

    proptest! {
        #[test]
        fn regenerated_gems_stay_interior(seed in any::<u64>(), now in 0.0f64..1.0e7) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut gem = Gem::new(HEART_GEM, &mut rng);
            for _ in 0..16 {
                gem.regenerate(now, &mut rng);
                prop_assert!(gem.cell.is_interior());
            }
        }
    }
}
