use rustc_hash::FxHashMap;

use crate::card::Card;
use crate::config::PhysicsConfig;
use crate::geom::{Point, Vector, point, vector};
use crate::viewport::{Bounds, Viewport};

mod forces;
mod sway;

pub use sway::{SwayPhase, wall_clock_ms};

/// Advances a card collection one fixed frame at a time.
///
/// A step is a pure snapshot-to-snapshot transform: every force is computed from the input slice
/// and the results are written to a fresh collection, so card order never changes the physics.
/// Steps are not scaled by elapsed time; the host decides the cadence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stepper {
    pub config: PhysicsConfig,
    pub sway: SwayPhase,
}

impl Stepper {
    /// Nominal minimum separation between two cards.
    const MIN_SEPARATION: f64 = 320.0;
    const REPULSION_CUTOFF_FACTOR: f64 = 2.5;
    /// Rest length of the spring between two linked cards.
    const IDEAL_LINK_DISTANCE: f64 = 380.0;
    const GRAVITY_FALLOFF: f64 = 250.0;
    const GRAVITY_AMPLIFICATION: f64 = 0.6;
    /// Fraction of speed kept (and reversed inward) when a card hits the bounds.
    const BOUNCE_RETENTION: f64 = 0.2;

    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            sway: SwayPhase::default(),
        }
    }

    pub fn with_sway(mut self, sway: SwayPhase) -> Self {
        self.sway = sway;
        self
    }

    pub fn repulsion_cutoff() -> f64 {
        Self::MIN_SEPARATION * Self::REPULSION_CUTOFF_FACTOR
    }

    pub fn ideal_link_distance() -> f64 {
        Self::IDEAL_LINK_DISTANCE
    }

    /// Computes the next frame.
    ///
    /// The card whose id equals `dragged` keeps its position and gets a zero velocity. Links to
    /// ids that are not in `cards` are ignored. `time_ms` only drives the cosmetic sway.
    pub fn step(
        &self,
        cards: &[Card],
        viewport: Viewport,
        dragged: Option<&str>,
        time_ms: f64,
    ) -> Vec<Card> {
        tracing::trace!(cards = cards.len(), dragged = ?dragged, "layout step");

        let snapshot = Snapshot::new(cards);
        let focal = viewport.focal_point();
        let bounds = viewport.bounds();

        cards
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                if dragged == Some(card.id.as_str()) {
                    return Card {
                        vx: 0.0,
                        vy: 0.0,
                        ..card.clone()
                    };
                }

                let force = self.net_force(idx, card, &snapshot, focal);
                let velocity = self.integrate(card.velocity(), force);
                let (position, velocity) = bounce(card.position() + velocity, velocity, &bounds);
                let phase = self.sway.seed(idx, &card.id);

                Card {
                    x: position.x,
                    y: position.y,
                    vx: velocity.x,
                    vy: velocity.y,
                    rotation: sway::ease(card.rotation, time_ms, phase),
                    ..card.clone()
                }
            })
            .collect()
    }

    fn net_force(&self, idx: usize, card: &Card, snapshot: &Snapshot<'_>, focal: Point) -> Vector {
        let cfg = &self.config;
        let p = card.position();
        let mut force = Vector::zero();

        let cutoff = Self::repulsion_cutoff();
        for (other_idx, other) in snapshot.cards.iter().enumerate() {
            if other_idx == idx {
                continue;
            }
            force += forces::repulsion(p, other.position(), cfg.repulsion, cutoff);
        }

        for linked_id in &card.connections {
            let Some(other_idx) = snapshot.index_of(linked_id) else {
                continue;
            };
            if other_idx == idx {
                continue;
            }
            force += forces::attraction(
                p,
                snapshot.cards[other_idx].position(),
                cfg.attraction,
                Self::IDEAL_LINK_DISTANCE,
            );
        }

        force += forces::gravity(
            p,
            focal,
            cfg.center_gravity,
            Self::GRAVITY_FALLOFF,
            Self::GRAVITY_AMPLIFICATION,
        );
        force
    }

    /// Damped explicit Euler velocity update with a hard speed cap.
    fn integrate(&self, velocity: Vector, force: Vector) -> Vector {
        let v = (velocity + force) * self.config.friction;
        let speed = v.length();
        if speed > self.config.max_velocity {
            v / speed * self.config.max_velocity
        } else {
            v
        }
    }
}

/// Read-only view of the pre-step collection with an id index.
struct Snapshot<'a> {
    cards: &'a [Card],
    by_id: FxHashMap<&'a str, usize>,
}

impl<'a> Snapshot<'a> {
    fn new(cards: &'a [Card]) -> Self {
        let mut by_id: FxHashMap<&'a str, usize> = FxHashMap::default();
        by_id.reserve(cards.len());
        for (idx, card) in cards.iter().enumerate() {
            // First card wins on duplicate ids.
            by_id.entry(card.id.as_str()).or_insert(idx);
        }
        Self { cards, by_id }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }
}

/// Clamps `position` into `bounds` and reflects the velocity of each clamped axis inward at a
/// fraction of its speed.
fn bounce(position: Point, velocity: Vector, bounds: &Bounds) -> (Point, Vector) {
    let (x, vx) = bounce_axis(position.x, velocity.x, bounds.min_x, bounds.max_x);
    let (y, vy) = bounce_axis(position.y, velocity.y, bounds.min_y, bounds.max_y);
    (point(x, y), vector(vx, vy))
}

fn bounce_axis(mut p: f64, mut v: f64, min: f64, max: f64) -> (f64, f64) {
    if p < min {
        p = min;
        v = v.abs() * Stepper::BOUNCE_RETENTION;
    }
    if p > max {
        p = max;
        v = -v.abs() * Stepper::BOUNCE_RETENTION;
    }
    (p, v)
}

#[cfg(test)]
mod tests {
    use super::{Stepper, bounce_axis};
    use crate::card::{Card, CardKind};
    use crate::viewport::Viewport;

    fn card(id: &str, x: f64, y: f64) -> Card {
        Card::new(id, CardKind::State, id, x, y)
    }

    #[test]
    fn bounce_reflects_inward_at_a_fifth_of_speed() {
        assert_eq!(bounce_axis(90.0, -2.0, 100.0, 200.0), (100.0, 0.4));
        assert_eq!(bounce_axis(210.0, 2.0, 100.0, 200.0), (200.0, -0.4));
        assert_eq!(bounce_axis(150.0, 2.0, 100.0, 200.0), (150.0, 2.0));
    }

    #[test]
    fn input_order_does_not_change_positions() {
        let a = card("a", 400.0, 300.0).with_connections(["c"]);
        let b = card("b", 450.0, 320.0);
        let c = card("c", 600.0, 400.0).with_connections(["a"]);
        let viewport = Viewport::new(1000.0, 800.0);
        let stepper = Stepper::default();

        let forward = stepper.step(&[a.clone(), b.clone(), c.clone()], viewport, None, 0.0);
        let reversed = stepper.step(&[c, b, a], viewport, None, 0.0);

        for f in &forward {
            let r = reversed.iter().find(|r| r.id == f.id).expect("same ids");
            assert_eq!((f.x, f.y, f.vx, f.vy), (r.x, r.y, r.vx, r.vy));
        }
    }

    #[test]
    fn self_link_is_ignored() {
        let viewport = Viewport::new(1000.0, 800.0);
        let stepper = Stepper::default();
        let plain = stepper.step(&[card("a", 300.0, 200.0)], viewport, None, 0.0);
        let looped = stepper.step(
            &[card("a", 300.0, 200.0).with_connections(["a"])],
            viewport,
            None,
            0.0,
        );
        assert_eq!((plain[0].x, plain[0].y), (looped[0].x, looped[0].y));
    }

    #[test]
    fn empty_collection_steps_to_empty() {
        let out = Stepper::default().step(&[], Viewport::new(1000.0, 800.0), None, 0.0);
        assert!(out.is_empty());
    }

    #[test]
    fn zero_viewport_produces_finite_output() {
        let out = Stepper::default().step(
            &[card("a", 10.0, 10.0), card("b", 10.0, 10.0)],
            Viewport::new(0.0, 0.0),
            None,
            0.0,
        );
        for c in out {
            assert!(c.x.is_finite() && c.y.is_finite());
            assert!(c.vx.is_finite() && c.vy.is_finite());
        }
    }
}
