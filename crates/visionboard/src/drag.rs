use otter::geom::point;
use otter::{Bounds, Card};

/// Pointer drag state. At most one card is dragged at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        id: String,
    },
}

impl DragState {
    /// Residual velocity kept by a card when it is released.
    pub const RELEASE_DAMPING: f64 = 0.5;

    pub fn dragged_id(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { id } => Some(id.as_str()),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Pointer-down on a card. Replaces any drag already in progress.
    pub fn begin(&mut self, id: &str) {
        tracing::debug!(id, "drag start");
        *self = DragState::Dragging { id: id.to_string() };
    }

    /// Pointer-move: places the dragged card at `(x, y)` clamped to `bounds` and pins its velocity.
    ///
    /// Returns `false` when nothing is dragged or the dragged card no longer exists.
    pub fn move_to(&self, cards: &mut [Card], bounds: &Bounds, x: f64, y: f64) -> bool {
        let Some(card) = self.dragged_card(cards) else {
            return false;
        };
        let p = bounds.clamp(point(x, y));
        card.x = p.x;
        card.y = p.y;
        card.vx = 0.0;
        card.vy = 0.0;
        true
    }

    /// Pointer-up: hands the card back to the physics with half of its residual velocity.
    pub fn end(&mut self, cards: &mut [Card]) -> Option<String> {
        let DragState::Dragging { id } = std::mem::take(self) else {
            return None;
        };
        tracing::debug!(id = id.as_str(), "drag end");
        if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
            card.vx *= Self::RELEASE_DAMPING;
            card.vy *= Self::RELEASE_DAMPING;
        }
        Some(id)
    }

    fn dragged_card<'a>(&self, cards: &'a mut [Card]) -> Option<&'a mut Card> {
        let id = self.dragged_id()?;
        cards.iter_mut().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::DragState;
    use otter::{Card, CardKind, Viewport};

    fn cards() -> Vec<Card> {
        vec![
            Card::new("a", CardKind::State, "A", 300.0, 300.0).with_velocity(0.8, -0.6),
            Card::new("b", CardKind::Identity, "B", 600.0, 300.0),
        ]
    }

    #[test]
    fn idle_moves_nothing() {
        let mut cards = cards();
        let bounds = Viewport::new(1000.0, 800.0).bounds();
        assert!(!DragState::Idle.move_to(&mut cards, &bounds, 10.0, 10.0));
        assert_eq!((cards[0].x, cards[0].y), (300.0, 300.0));
    }

    #[test]
    fn move_clamps_to_layout_bounds_and_pins_velocity() {
        let mut cards = cards();
        let bounds = Viewport::new(1000.0, 800.0).bounds();
        let mut drag = DragState::default();
        drag.begin("a");

        assert!(drag.move_to(&mut cards, &bounds, 5.0, 790.0));
        assert_eq!((cards[0].x, cards[0].y), (180.0, 620.0));
        assert_eq!((cards[0].vx, cards[0].vy), (0.0, 0.0));
    }

    #[test]
    fn release_halves_residual_velocity() {
        let mut cards = cards();
        let mut drag = DragState::default();
        drag.begin("a");

        assert_eq!(drag.end(&mut cards).as_deref(), Some("a"));
        assert_eq!((cards[0].vx, cards[0].vy), (0.4, -0.3));
        assert_eq!(drag, DragState::Idle);
        assert_eq!(drag.end(&mut cards), None);
    }

    #[test]
    fn beginning_a_second_drag_switches_cards() {
        let mut drag = DragState::default();
        drag.begin("a");
        drag.begin("b");
        assert_eq!(drag.dragged_id(), Some("b"));
    }

    #[test]
    fn dragging_a_removed_card_is_a_no_op() {
        let mut cards = cards();
        let bounds = Viewport::new(1000.0, 800.0).bounds();
        let mut drag = DragState::default();
        drag.begin("gone");
        assert!(!drag.move_to(&mut cards, &bounds, 400.0, 400.0));
        assert_eq!(drag.end(&mut cards).as_deref(), Some("gone"));
    }
}
