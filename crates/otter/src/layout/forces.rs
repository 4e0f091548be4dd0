//! Per-card force terms. Every function reads positions only; nothing here mutates a card.

use crate::geom::{Point, Vector, floored_length, vector};

/// Inverse-square push of `other` on `p`, zero at or beyond `cutoff`.
///
/// Coincident points have no separating direction and therefore push with zero force.
pub(crate) fn repulsion(p: Point, other: Point, strength: f64, cutoff: f64) -> Vector {
    let delta = p - other;
    let distance = floored_length(delta);
    if distance >= cutoff {
        return Vector::zero();
    }
    let magnitude = strength / (distance * distance);
    delta / distance * magnitude
}

/// Spring toward (or away from) a linked card, at rest when `distance == ideal`.
pub(crate) fn attraction(p: Point, target: Point, stiffness: f64, ideal: f64) -> Vector {
    let delta = target - p;
    let distance = floored_length(delta);
    let magnitude = (distance - ideal) * stiffness;
    delta / distance * magnitude
}

/// Linear pull toward `focal`, amplified for cards that drifted far away.
pub(crate) fn gravity(
    p: Point,
    focal: Point,
    strength: f64,
    falloff: f64,
    amplification: f64,
) -> Vector {
    let delta = focal - p;
    let distance = delta.length();
    let multiplier = 1.0 + (distance / falloff) * amplification;
    vector(
        delta.x * strength * multiplier,
        delta.y * strength * multiplier,
    )
}
