use otter::{Card, CardKind, Viewport};

/// What the user typed when creating a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub kind: CardKind,
    pub label: String,
    pub description: Option<String>,
}

impl CardDraft {
    pub fn new(kind: CardKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            description: None,
        }
    }

    /// Empty descriptions are dropped.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.trim().is_empty()).then_some(description);
        self
    }
}

/// Spawns new cards near the viewport center with a small random nudge.
///
/// Randomness comes from a seeded generator so a board replayed with the same seed spawns the same
/// cards, ids included.
#[derive(Debug, Clone)]
pub struct CardFactory {
    rng: XorShift64Star,
}

impl Default for CardFactory {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CardFactory {
    const SPREAD_X: f64 = 200.0;
    const SPREAD_Y: f64 = 150.0;
    const SPREAD_VELOCITY: f64 = 1.0;
    const SPREAD_ROTATION_DEG: f64 = 8.0;
    const MIN_STRENGTH: f64 = 0.6;
    const STRENGTH_RANGE: f64 = 0.4;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: XorShift64Star::new(seed),
        }
    }

    pub fn create(&mut self, draft: CardDraft, viewport: Viewport) -> Card {
        let id = self.next_id();
        let x = viewport.width / 2.0 + self.jitter(Self::SPREAD_X);
        let y = viewport.height / 2.0 + self.jitter(Self::SPREAD_Y);
        let vx = self.jitter(Self::SPREAD_VELOCITY);
        let vy = self.jitter(Self::SPREAD_VELOCITY);
        let rotation = self.jitter(Self::SPREAD_ROTATION_DEG);
        let strength = Self::MIN_STRENGTH + self.rng.next_f64_unit() * Self::STRENGTH_RANGE;

        Card {
            description: draft.description,
            vx,
            vy,
            rotation,
            strength,
            ..Card::new(id, draft.kind, draft.label, x, y)
        }
    }

    /// Uniform in `[-spread / 2, spread / 2)`.
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.rng.next_f64_unit() - 0.5) * spread
    }

    fn next_id(&mut self) -> String {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.rng.next_u64().to_le_bytes());
        bytes[8..].copy_from_slice(&self.rng.next_u64().to_le_bytes());
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }
}

#[derive(Debug, Clone)]
struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D_u64)
    }

    fn next_f64_unit(&mut self) -> f64 {
        // [0, 1) with 53 bits of precision.
        let u = self.next_u64() >> 11;
        (u as f64) / ((1u64 << 53) as f64)
    }
}
