//! Collision and scoring rules
//!
//! Entities only move themselves; everything that touches score or health
//! happens here.

use super::entity::Collides;
use super::gem::Gem;
use super::player::{Direction, MoveOutcome};
use super::state::GameState;
use crate::consts::*;

/// Apply a direction command; crossings score and send the player home
pub fn apply_move(state: &mut GameState, direction: Direction) {
    if !state.session.is_running() {
        return;
    }
    if state.player.handle_input(direction) == MoveOutcome::Crossed {
        reset_player(state);
        state.session.score += CROSSING_POINTS;
        log::debug!("Crossed! score {}", state.session.score);
    }
}

/// Send the player back to start and offer a heart if one is needed
///
/// Never schedules a second heart respawn while one is active or pending.
pub fn reset_player(state: &mut GameState) {
    state.player.reset(state.session.health);
    let heart = &mut state.heart_gem;
    if !state.session.health_full() && !heart.active && !heart.respawn_pending() {
        heart.regenerate(state.clock_ms, &mut state.rng);
    }
}

/// Apply the hit for one enemy that overlaps the player
///
/// Returns true if the hit landed.
pub fn enemy_hit(state: &mut GameState, enemy_index: usize) -> bool {
    if state.session.health == 0 {
        return false;
    }
    let hit = state
        .enemies
        .get(enemy_index)
        .is_some_and(|enemy| enemy.collides_with(&state.player));
    if hit {
        state.session.health -= 1;
        log::debug!(
            "Hit by bug in row {}, health {}",
            state.player.cell.row,
            state.session.health
        );
        reset_player(state);
    }
    hit
}

/// Which of the two gems a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GemSlot {
    Score,
    Heart,
}

/// Collect a gem the player is standing on
///
/// Returns true if the gem was picked up this call.
pub fn collect_gem(state: &mut GameState, slot: GemSlot) -> bool {
    let player = state.player.clone();
    let now_ms = state.clock_ms;
    let session = &mut state.session;
    let gem: &mut Gem = match slot {
        GemSlot::Score => &mut state.score_gem,
        GemSlot::Heart => &mut state.heart_gem,
    };

    if !gem.active || !gem.collides_with(&player) {
        return false;
    }

    session.score += gem.spec.points;
    session.health = session
        .health
        .saturating_add(gem.spec.health_bonus)
        .min(HEALTH_START);
    gem.active = false;
    gem.cancel_respawn();
    log::debug!(
        "Picked up {:?} gem: score {}, health {}",
        gem.kind(),
        session.score,
        session.health
    );

    if gem.restores_health() && session.health_full() {
        // Withheld until the next hit
        gem.cancel_respawn();
    } else {
        gem.regenerate(now_ms, &mut state.rng);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::Enemy;
    use crate::sim::grid::Cell;
    use crate::sim::state::GameConfig;

    fn running_state() -> GameState {
        let mut state = GameState::new(2024, GameConfig::default());
        state.start();
        state.enemies.clear();
        state
    }

    #[test]
    fn test_crossing_scores_and_resets() {
        let mut state = running_state();
        state.player.cell = Cell::new(2, 1);
        apply_move(&mut state, Direction::Up);
        assert_eq!(state.player.cell, Cell::new(2, 5));
        assert_eq!(state.session.score, 1);
    }

    #[test]
    fn test_moves_ignored_when_not_running() {
        let mut state = GameState::new(2024, GameConfig::default());
        apply_move(&mut state, Direction::Up);
        assert_eq!(state.player.cell, Cell::start());
    }

    #[test]
    fn test_enemy_hit_costs_health_and_resets() {
        let mut state = running_state();
        state.player.cell = Cell::new(1, 2);
        state.enemies.push(Enemy::new(0.5, 2, 1.0));
        assert!(enemy_hit(&mut state, 0));
        assert_eq!(state.session.health, 4);
        assert_eq!(state.player.cell, Cell::start());
        // Dropping below max health queues a heart
        assert!(state.heart_gem.respawn_pending());
    }

    #[test]
    fn test_no_hit_at_zero_health() {
        let mut state = running_state();
        state.session.health = 0;
        state.player.cell = Cell::new(1, 2);
        state.enemies.push(Enemy::new(0.5, 2, 1.0));
        assert!(!enemy_hit(&mut state, 0));
        assert_eq!(state.session.health, 0);
        assert_eq!(state.player.cell, Cell::new(1, 2));
    }

    #[test]
    fn test_reset_at_full_health_schedules_nothing() {
        let mut state = running_state();
        state.heart_gem.active = true;
        reset_player(&mut state);
        reset_player(&mut state);
        assert!(!state.heart_gem.respawn_pending());

        state.heart_gem.active = false;
        reset_player(&mut state);
        assert!(!state.heart_gem.respawn_pending());
    }

    #[test]
    fn test_reset_does_not_restart_pending_heart() {
        let mut state = running_state();
        state.session.health = 3;
        reset_player(&mut state);
        let wake = state.heart_gem.respawn_at();
        assert!(wake.is_some());

        state.clock_ms += 4000.0;
        reset_player(&mut state);
        assert_eq!(state.heart_gem.respawn_at(), wake);
    }

    #[test]
    fn test_score_gem_pickup() {
        let mut state = running_state();
        state.score_gem.cell = Cell::new(3, 2);
        state.score_gem.active = true;
        state.player.cell = Cell::new(3, 2);

        assert!(collect_gem(&mut state, GemSlot::Score));
        assert_eq!(state.session.score, 5);
        assert!(!state.score_gem.active);
        assert!(state.score_gem.respawn_pending());
        // Already collected
        assert!(!collect_gem(&mut state, GemSlot::Score));
    }

    #[test]
    fn test_inactive_gem_is_not_collected() {
        let mut state = running_state();
        state.score_gem.active = false;
        state.player.cell = state.score_gem.cell;
        assert!(!collect_gem(&mut state, GemSlot::Score));
        assert_eq!(state.session.score, 0);
    }

    #[test]
    fn test_heart_pickup_to_full_is_withheld() {
        let mut state = running_state();
        state.session.health = 4;
        state.heart_gem.active = true;
        state.heart_gem.cell = Cell::new(1, 1);
        state.player.cell = Cell::new(1, 1);

        assert!(collect_gem(&mut state, GemSlot::Heart));
        assert_eq!(state.session.health, 5);
        assert!(!state.heart_gem.active);
        assert!(!state.heart_gem.respawn_pending());
    }

    #[test]
    fn test_heart_pickup_below_full_respawns() {
        let mut state = running_state();
        state.session.health = 2;
        state.heart_gem.active = true;
        state.player.cell = state.heart_gem.cell;

        assert!(collect_gem(&mut state, GemSlot::Heart));
        assert_eq!(state.session.health, 3);
        assert!(state.heart_gem.respawn_pending());
    }
}
