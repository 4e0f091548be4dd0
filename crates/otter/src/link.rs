use std::fmt::Write as _;

use serde::Serialize;

use crate::card::Card;
use crate::geom::{Point, point};

/// Bulge of a link as a fraction of its length.
const CURVE_RATIO: f64 = 0.05;
const WAVE_AMPLITUDE: f64 = 8.0;
const WAVE_FREQUENCY_PER_MS: f64 = 0.0006;

/// A single quadratic curve between two card centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkPath {
    pub from: Point,
    pub control: Point,
    pub to: Point,
}

impl LinkPath {
    /// SVG path data: `M x y Q cx cy x y`.
    pub fn to_svg_path(&self) -> String {
        let mut out = String::with_capacity(64);
        out.push_str("M ");
        push_point(&mut out, self.from);
        out.push_str(" Q ");
        push_point(&mut out, self.control);
        out.push(' ');
        push_point(&mut out, self.to);
        out
    }

    /// Evaluates the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        point(
            u * u * self.from.x + 2.0 * u * t * self.control.x + t * t * self.to.x,
            u * u * self.from.y + 2.0 * u * t * self.control.y + t * t * self.to.y,
        )
    }
}

/// The breathing curve between the centers of `from` and `to` at `time_ms`.
///
/// Coincident endpoints have no normal; the control point then stays on the midpoint.
pub fn link_path(from: &Card, to: &Card, time_ms: f64) -> LinkPath {
    curve_between(from.position(), to.position(), time_ms)
}

pub(crate) fn curve_between(from: Point, to: Point, time_ms: f64) -> LinkPath {
    let delta = to - from;
    let distance = delta.length();
    let mid = from.lerp(to, 0.5);

    let control = if distance > 0.0 && distance.is_finite() {
        let normal = point(-delta.y / distance, delta.x / distance);
        let wave = (time_ms * WAVE_FREQUENCY_PER_MS).sin() * WAVE_AMPLITUDE;
        let offset = distance * CURVE_RATIO + wave;
        point(mid.x + normal.x * offset, mid.y + normal.y * offset)
    } else {
        mid
    };

    LinkPath { from, control, to }
}

/// One resolved, undirected link between two cards of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub path: LinkPath,
}

/// Every link in `cards`, once per unordered pair, in collection order.
///
/// Links stored on one endpoint only are still drawn; dangling ids and self-links are skipped.
pub fn links(cards: &[Card], time_ms: f64) -> Vec<Link<'_>> {
    let mut seen: rustc_hash::FxHashSet<(usize, usize)> = rustc_hash::FxHashSet::default();
    let mut by_id: rustc_hash::FxHashMap<&str, usize> = rustc_hash::FxHashMap::default();
    for (idx, card) in cards.iter().enumerate() {
        by_id.entry(card.id.as_str()).or_insert(idx);
    }

    let mut out = Vec::new();
    for (idx, card) in cards.iter().enumerate() {
        for id in &card.connections {
            let Some(&other) = by_id.get(id.as_str()) else {
                continue;
            };
            if other == idx {
                continue;
            }
            let (a, b) = if idx < other { (idx, other) } else { (other, idx) };
            if !seen.insert((a, b)) {
                continue;
            }
            out.push(Link {
                from: cards[a].id.as_str(),
                to: cards[b].id.as_str(),
                path: link_path(&cards[a], &cards[b], time_ms),
            });
        }
    }
    out
}

fn push_point(out: &mut String, p: Point) {
    push_number(out, p.x);
    out.push(' ');
    push_number(out, p.y);
}

/// Writes `v` rounded to 3 decimals with trailing zeros trimmed; non-finite values become `0`.
fn push_number(out: &mut String, v: f64) {
    if !v.is_finite() || v.abs() < 0.0005 {
        out.push('0');
        return;
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    let start = out.len();
    let _ = write!(out, "{rounded:.3}");
    while out.len() > start && out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
}
