//! Cosmetic pauses between AI phases
//!
//! Pacing never touches game state. Tests and headless runs use `NoPacing`.

use std::time::Duration;

/// Called between phases of an AI turn
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Skip all pauses
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _delay: Duration) {}
}

/// Block the current thread for the requested delay
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacing;

impl Pacer for SleepPacing {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Records requested delays instead of sleeping
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

#[cfg(test)]
impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}
