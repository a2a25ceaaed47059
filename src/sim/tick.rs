//! Simulation tick
//!
//! One call per display frame: session control, queued moves, then entity
//! updates in a fixed order.

use super::entity::{Entity, UpdateCtx};
use super::player::Direction;
use super::rules::{self, GemSlot};
use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Moves received since the previous tick, oldest first
    pub moves: Vec<Direction>,
    /// Start a session from the options screen
    pub start: bool,
    /// Play again after game over
    pub restart: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Session control
    match state.session.phase {
        GamePhase::NotStarted if input.start => {
            state.start();
        }
        GamePhase::GameOver if input.restart => {
            state.restart();
        }
        _ => {}
    }

    if !state.session.is_running() {
        return;
    }

    state.clock_ms += f64::from(dt) * 1000.0;

    for &direction in &input.moves {
        rules::apply_move(state, direction);
    }

    update_entities(state, dt);

    if state.session.health == 0 {
        state.session.phase = GamePhase::GameOver;
        log::info!("Game over: {} points", state.session.score);
    }
}

/// Enemies, then the score gem and heart gem, then the player
fn update_entities(state: &mut GameState, dt: f32) {
    let now_ms = state.clock_ms;

    for i in 0..state.enemies.len() {
        let mut ctx = UpdateCtx {
            dt,
            now_ms,
            rng: &mut state.rng,
        };
        state.enemies[i].update(&mut ctx);
        rules::enemy_hit(state, i);
    }

    for slot in [GemSlot::Score, GemSlot::Heart] {
        let mut ctx = UpdateCtx {
            dt,
            now_ms,
            rng: &mut state.rng,
        };
        match slot {
            GemSlot::Score => state.score_gem.update(&mut ctx),
            GemSlot::Heart => state.heart_gem.update(&mut ctx),
        }
        rules::collect_gem(state, slot);
    }

    let mut ctx = UpdateCtx {
        dt,
        now_ms,
        rng: &mut state.rng,
    };
    state.player.update(&mut ctx);
}
