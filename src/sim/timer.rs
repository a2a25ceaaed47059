//! Single-shot respawn timer
//!
//! A gem owns one of these instead of a host timer callback. The tick loop
//! asks it whether the wake time has passed on the simulation clock, so
//! cancellation and firing can never interleave.

use serde::{Deserialize, Serialize};

/// At most one pending wake time (simulation milliseconds)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RespawnTimer {
    wake_at_ms: Option<f64>,
}

impl RespawnTimer {
    /// Schedule a wake-up `delay_ms` after `now_ms`, replacing any pending one
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) {
        self.wake_at_ms = Some(now_ms + delay_ms);
    }

    pub fn cancel(&mut self) {
        self.wake_at_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.wake_at_ms.is_some()
    }

    pub fn wake_at(&self) -> Option<f64> {
        self.wake_at_ms
    }

    /// Consume the timer if it is due. Returns true exactly once per schedule.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.wake_at_ms {
            Some(wake) if now_ms >= wake => {
                self.wake_at_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_when_due() {
        let mut timer = RespawnTimer::default();
        timer.schedule(1000.0, 3000.0);
        assert!(!timer.fire(3999.0));
        assert!(timer.fire(4000.0));
        assert!(!timer.fire(5000.0));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut timer = RespawnTimer::default();
        timer.schedule(0.0, 1000.0);
        timer.schedule(500.0, 1000.0);
        // The stale wake time must not fire
        assert!(!timer.fire(1200.0));
        assert!(timer.fire(1500.0));
    }

    #[test]
    fn test_cancel() {
        let mut timer = RespawnTimer::default();
        timer.schedule(0.0, 10.0);
        timer.cancel();
        assert!(!timer.fire(100.0));
        assert_eq!(timer.wake_at(), None);
    }
}
