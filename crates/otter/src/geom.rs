//! Board-space geometry in viewport pixels.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Euclidean distance floored at `1.0` so it can be used as a divisor for coincident points.
/// `f64::max` also maps a NaN length to the floor.
pub(crate) fn floored_length(v: Vector) -> f64 {
    v.length().max(1.0)
}
