use serde::{Deserialize, Serialize};

use crate::geom::{Point, point};

/// The simulated area, in pixels.
///
/// `height` must already exclude any fixed UI region reserved at the bottom of the window; see
/// [`Viewport::from_window`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Horizontal padding on each side, as a fraction of the width.
    pub const PADDING_X_RATIO: f64 = 0.18;
    pub const PADDING_TOP: f64 = 120.0;
    /// Larger than the top padding: the area right above the reserved bottom region stays clear.
    pub const PADDING_BOTTOM: f64 = 180.0;
    /// The focal point sits above the geometric center.
    pub const FOCAL_Y_RATIO: f64 = 0.45;

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_window(window_width: f64, window_height: f64, reserved_bottom: f64) -> Self {
        Self {
            width: window_width,
            height: window_height - reserved_bottom,
        }
    }

    pub fn focal_point(&self) -> Point {
        point(self.width / 2.0, self.height * Self::FOCAL_Y_RATIO)
    }

    pub fn bounds(&self) -> Bounds {
        let pad_x = self.width * Self::PADDING_X_RATIO;
        Bounds {
            min_x: pad_x,
            max_x: self.width - pad_x,
            min_y: Self::PADDING_TOP,
            max_y: self.height - Self::PADDING_BOTTOM,
        }
    }
}

/// The padded rectangle every non-dragged card is kept inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Clamps min-then-max on each axis. When a viewport is too small for its padding
    /// (`min > max`) the max bound wins.
    pub fn clamp(&self, p: Point) -> Point {
        point(
            clamp_axis(p.x, self.min_x, self.max_x),
            clamp_axis(p.y, self.min_y, self.max_y),
        )
    }
}

fn clamp_axis(v: f64, min: f64, max: f64) -> f64 {
    let v = if v < min { min } else { v };
    if v > max { max } else { v }
}
