//! Shared entity capabilities
//!
//! Enemy, Player and Gem are independent structs; they only share these traits.

use rand_pcg::Pcg32;

use super::frame::Frame;
use super::player::Player;

/// Per-tick context handed to every entity update
pub struct UpdateCtx<'a> {
    /// Elapsed time since the previous tick (seconds)
    pub dt: f32,
    /// Simulation clock after this tick's advance (milliseconds)
    pub now_ms: f64,
    /// Session RNG
    pub rng: &'a mut Pcg32,
}

/// Something that advances with the simulation and can be drawn
pub trait Entity {
    /// Advance simulated state by one tick
    fn update(&mut self, ctx: &mut UpdateCtx<'_>);

    /// Append this entity's current appearance to the frame
    fn render(&self, frame: &mut Frame);
}

/// Entities that can overlap the player
pub trait Collides {
    fn collides_with(&self, player: &Player) -> bool;
}
