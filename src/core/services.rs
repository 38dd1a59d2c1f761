//! # Extension Points
//!
//! The source prototype documented its real game logic — GPS check-in,
//! reward persistence, text-to-speech — as comments inside the
//! navigation callbacks. Here each of those concerns is an explicit
//! interface with an inert default implementation, so the navigation
//! logic stays free of TODO branches and a real collaborator can be
//! dropped in later without touching the reducer.
//!
//! None of the defaults do anything beyond logging. That is the point:
//! they reproduce today's behavior (check-in always succeeds, rewards
//! vanish, dialogue is silent) through a named seam.

use log::{debug, info};

/// Answers whether the player is close enough to a waypoint.
///
/// Consulted by the map screen's check-in action. A real
/// implementation would ask a location service; the default always
/// says yes, matching the ungated transition in the source.
pub trait ProximityCheck {
    fn near_waypoint(&self, waypoint: &str) -> bool;
}

/// Always reports the player as in range.
pub struct AlwaysNearby;

impl ProximityCheck for AlwaysNearby {
    fn near_waypoint(&self, waypoint: &str) -> bool {
        debug!("Proximity check for '{waypoint}': always near");
        true
    }
}

/// Records rewards the player has earned.
///
/// `grant` must be safe to call with the same reward twice;
/// deduplication (or not) is the implementation's business. `granted`
/// reports what the ledger currently holds, in grant order.
pub trait RewardLedger {
    fn grant(&mut self, reward: &str);
    fn granted(&self) -> Vec<String>;
}

/// Logs grants and keeps nothing. Rewards are not persisted anywhere
/// in the prototype.
#[derive(Default)]
pub struct NullLedger;

impl RewardLedger for NullLedger {
    fn grant(&mut self, reward: &str) {
        info!("Reward granted (not persisted): '{reward}'");
    }

    fn granted(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Speaks a line of character dialogue aloud.
pub trait SpeechSynthesizer {
    fn speak(&mut self, line: &str);
}

/// Logs the line instead of speaking it.
pub struct NullSpeech;

impl SpeechSynthesizer for NullSpeech {
    fn speak(&mut self, line: &str) {
        info!("TTS (silent): {line}");
    }
}
