use serde::{Deserialize, Serialize};

use crate::geom::{Point, Vector, point, vector};

/// The two card categories. Irrelevant to physics; kept for presentation and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    State,
    Identity,
}

impl CardKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CardKind::State => "state",
            CardKind::Identity => "identity",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "state" => Some(CardKind::State),
            "identity" => Some(CardKind::Identity),
            _ => None,
        }
    }
}

/// A positioned vision card.
///
/// The layout engine only reads and writes `x`, `y`, `vx`, `vy` and `rotation`, and reads `id` and
/// `connections`. Everything else is payload carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Ids of linked cards. Links are nominally symmetric but dangling or one-sided entries are
    /// tolerated by the layout.
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default)]
    pub strength: f64,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

fn default_scale() -> f64 {
    1.0
}

impl Card {
    /// A resting card with no payload beyond its label.
    pub fn new(
        id: impl Into<String>,
        kind: CardKind,
        label: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            description: None,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            rotation: 0.0,
            scale: 1.0,
            connections: Vec::new(),
            strength: 0.0,
            goals: Vec::new(),
            bg_color: None,
        }
    }

    pub fn with_connections<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    pub fn position(&self) -> Point {
        point(self.x, self.y)
    }

    pub fn velocity(&self) -> Vector {
        vector(self.vx, self.vy)
    }

    pub fn speed(&self) -> f64 {
        self.velocity().length()
    }

    pub fn is_connected_to(&self, id: &str) -> bool {
        self.connections.iter().any(|c| c == id)
    }
}
