use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// How a card's sway phase is seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwayPhase {
    /// Phase follows the card's index in the collection; reordering shifts the sway.
    #[default]
    Index,
    /// Phase follows a stable hash of the card id and survives reordering.
    IdHash,
}

pub(crate) const AMPLITUDE_DEG: f64 = 4.0;
pub(crate) const FREQUENCY_PER_MS: f64 = 0.00025;
pub(crate) const INDEX_PHASE_STEP: f64 = 1.8;
pub(crate) const EASING: f64 = 0.015;

impl SwayPhase {
    pub(crate) fn seed(self, index: usize, id: &str) -> f64 {
        match self {
            SwayPhase::Index => index as f64 * INDEX_PHASE_STEP,
            SwayPhase::IdHash => {
                let mut h = FxHasher::default();
                id.hash(&mut h);
                (h.finish() as f64 / u64::MAX as f64) * std::f64::consts::TAU
            }
        }
    }
}

/// Eases `rotation` a small fraction of the way toward the current sway target.
pub(crate) fn ease(rotation: f64, time_ms: f64, phase: f64) -> f64 {
    let target = (time_ms * FREQUENCY_PER_MS + phase).sin() * AMPLITUDE_DEG;
    rotation + (target - rotation) * EASING
}

/// Milliseconds since the Unix epoch, for hosts that drive the sway from the wall clock.
pub fn wall_clock_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}
