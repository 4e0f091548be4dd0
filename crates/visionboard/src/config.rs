use std::path::Path;

use otter::{PhysicsConfig, SwayPhase};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::throttle::FrameThrottle;

/// Host-level settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    pub physics: PhysicsConfig,
    pub sway: SwayPhase,
    /// Minimum wall-clock time between two layout steps.
    pub frame_interval_ms: f64,
    /// Height of the fixed toolbar below the board, excluded from the simulated area.
    pub reserved_bottom: f64,
    /// Seed for spawning new cards.
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            sway: SwayPhase::default(),
            frame_interval_ms: FrameThrottle::DEFAULT_INTERVAL_MS,
            reserved_bottom: 120.0,
            seed: 0,
        }
    }
}

impl BoardConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading board config");
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.physics.validate()?;
        if !(self.frame_interval_ms.is_finite() && self.frame_interval_ms >= 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("frameIntervalMs must be >= 0, got {}", self.frame_interval_ms),
            });
        }
        if !(self.reserved_bottom.is_finite() && self.reserved_bottom >= 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("reservedBottom must be >= 0, got {}", self.reserved_bottom),
            });
        }
        Ok(())
    }
}
