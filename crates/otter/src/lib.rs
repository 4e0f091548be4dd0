#![forbid(unsafe_code)]

//! Headless force-directed layout for small boards of vision cards.
//!
//! `otter` is driven by the `visionboard` host once per rendered frame. It owns no state between
//! calls: each [`step`] maps the previous card snapshot to the next one, and [`link_path`] turns a
//! pair of cards into a gently animated quadratic curve for drawing.

pub mod card;
pub mod config;
pub mod error;
pub mod geom;
pub mod layout;
pub mod link;
pub mod viewport;

pub use card::{Card, CardKind};
pub use config::PhysicsConfig;
pub use error::{Error, Result};
pub use layout::{Stepper, SwayPhase, wall_clock_ms};
pub use link::{Link, LinkPath, link_path, links};
pub use viewport::{Bounds, Viewport};

/// One fixed-size layout step with index-seeded sway.
pub fn step(
    cards: &[Card],
    viewport: Viewport,
    config: &PhysicsConfig,
    dragged: Option<&str>,
    time_ms: f64,
) -> Vec<Card> {
    Stepper::new(*config).step(cards, viewport, dragged, time_ms)
}
