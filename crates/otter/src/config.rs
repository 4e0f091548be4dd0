use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunable physics constants. Partial JSON objects fall back to the defaults per field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConfig {
    /// Velocity multiplier applied every step, `0 < friction < 1`.
    pub friction: f64,
    /// Inverse-square repulsion strength.
    pub repulsion: f64,
    /// Spring stiffness toward linked cards.
    pub attraction: f64,
    /// Pull toward the viewport focal point.
    pub center_gravity: f64,
    /// Hard cap on per-step speed.
    pub max_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: 0.96,
            repulsion: 22000.0,
            attraction: 0.002,
            center_gravity: 0.0015,
            max_velocity: 1.0,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("friction", self.friction),
            ("repulsion", self.repulsion),
            ("attraction", self.attraction),
            ("centerGravity", self.center_gravity),
            ("maxVelocity", self.max_velocity),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig { field, value });
            }
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(Error::InvalidConfig {
                field: "friction",
                value: self.friction,
            });
        }
        if self.max_velocity <= 0.0 {
            return Err(Error::InvalidConfig {
                field: "maxVelocity",
                value: self.max_velocity,
            });
        }
        Ok(())
    }
}
