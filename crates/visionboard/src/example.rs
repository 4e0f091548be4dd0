use otter::{Card, CardKind};

/// `(id, kind, label, description, x, y, rotation, strength)`
const STARTER_CARDS: [(&str, CardKind, &str, &str, f64, f64, f64, f64); 8] = [
    ("1", CardKind::State, "Calm Authority", "Speaking with conviction", 300.0, 200.0, -3.0, 0.9),
    ("2", CardKind::Identity, "Builder", "Creating systems that last", 550.0, 180.0, 4.0, 0.85),
    ("3", CardKind::State, "Creative Flow", "Deep immersion in work", 800.0, 220.0, -2.0, 0.75),
    ("4", CardKind::Identity, "Visionary", "Seeing what others miss", 400.0, 380.0, 2.0, 0.8),
    ("5", CardKind::State, "Inner Peace", "Grounded and centered", 650.0, 400.0, -4.0, 0.7),
    ("6", CardKind::Identity, "Leader", "Inspiring others forward", 250.0, 350.0, 3.0, 0.85),
    ("7", CardKind::State, "Abundance", "Wealth in all forms", 750.0, 350.0, -1.0, 0.9),
    ("8", CardKind::Identity, "Creator", "Making beautiful things", 500.0, 300.0, 2.0, 0.8),
];

/// The board shown on first start and after a reset.
pub fn example_cards() -> Vec<Card> {
    STARTER_CARDS
        .iter()
        .map(|&(id, kind, label, description, x, y, rotation, strength)| Card {
            description: Some(description.to_string()),
            rotation,
            strength,
            ..Card::new(id, kind, label, x, y)
        })
        .collect()
}
