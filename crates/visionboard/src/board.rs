use otter::{Card, Link, Stepper, Viewport};

use crate::config::BoardConfig;
use crate::drag::DragState;
use crate::error::{Error, Result};
use crate::example::example_cards;
use crate::factory::{CardDraft, CardFactory};
use crate::store::BoardStore;
use crate::throttle::FrameThrottle;

/// Editable card fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub label: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    /// `Some(None)` goes back to the kind's default color.
    pub bg_color: Option<Option<String>>,
}

/// The authoritative card collection plus the host state that drives the layout.
///
/// All mutation goes through the board; the layout itself only ever sees an immutable snapshot
/// and the board replaces its collection wholesale with the result.
#[derive(Debug, Clone)]
pub struct Board {
    cards: Vec<Card>,
    viewport: Viewport,
    stepper: Stepper,
    drag: DragState,
    throttle: FrameThrottle,
    factory: CardFactory,
    selected: Option<String>,
}

impl Board {
    pub fn new(cards: Vec<Card>, viewport: Viewport, config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cards,
            viewport,
            stepper: Stepper::new(config.physics).with_sway(config.sway),
            drag: DragState::default(),
            throttle: FrameThrottle::new(config.frame_interval_ms),
            factory: CardFactory::new(config.seed),
            selected: None,
        })
    }

    /// Restores the saved board, falling back to the example board when nothing was saved or the
    /// saved data cannot be read.
    pub fn restore_or_example(
        store: &dyn BoardStore,
        viewport: Viewport,
        config: &BoardConfig,
    ) -> Result<Self> {
        let cards = match store.load() {
            Ok(Some(cards)) => cards,
            Ok(None) => example_cards(),
            Err(err) => {
                tracing::warn!(%err, "saved board unreadable, starting from the example board");
                example_cards()
            }
        };
        Self::new(cards, viewport, config)
    }

    pub fn save(&self, store: &dyn BoardStore) -> Result<()> {
        store.save(&self.cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        tracing::debug!(width = viewport.width, height = viewport.height, "board resized");
        self.viewport = viewport;
    }

    /// Called from the host's render callback; steps only when the frame interval has elapsed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.throttle.ready(now_ms) {
            return false;
        }
        self.step_at(now_ms);
        true
    }

    /// One unconditional layout step.
    pub fn step_at(&mut self, time_ms: f64) {
        self.cards = self
            .stepper
            .step(&self.cards, self.viewport, self.drag.dragged_id(), time_ms);
    }

    /// Link curves for every relationship on the board.
    pub fn links(&self, time_ms: f64) -> Vec<Link<'_>> {
        otter::links(&self.cards, time_ms)
    }

    /// Spawns a card from `draft` and selects it.
    pub fn add_card(&mut self, draft: CardDraft) -> &Card {
        let card = self.factory.create(draft, self.viewport);
        tracing::debug!(id = card.id.as_str(), kind = card.kind.as_str(), "card added");
        self.selected = Some(card.id.clone());
        self.cards.push(card);
        let last = self.cards.len() - 1;
        &self.cards[last]
    }

    /// Removes a card and every link pointing at it.
    pub fn remove_card(&mut self, id: &str) -> Result<Card> {
        let idx = self.index_of(id)?;
        let removed = self.cards.remove(idx);
        for card in &mut self.cards {
            card.connections.retain(|c| c != id);
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        if self.drag.dragged_id() == Some(id) {
            self.drag = DragState::Idle;
        }
        tracing::debug!(id, "card removed");
        Ok(removed)
    }

    pub fn update_card(&mut self, id: &str, patch: CardPatch) -> Result<()> {
        let idx = self.index_of(id)?;
        let card = &mut self.cards[idx];
        if let Some(label) = patch.label {
            card.label = label;
        }
        if let Some(description) = patch.description {
            card.description = description;
        }
        if let Some(bg_color) = patch.bg_color {
            card.bg_color = bg_color;
        }
        Ok(())
    }

    pub fn add_goal(&mut self, id: &str, goal: impl Into<String>) -> Result<()> {
        let idx = self.index_of(id)?;
        self.cards[idx].goals.push(goal.into());
        Ok(())
    }

    /// Links two cards on both endpoints. Linking an already linked pair is a no-op.
    pub fn connect(&mut self, a: &str, b: &str) -> Result<()> {
        if a == b {
            return Err(Error::SelfLink { id: a.to_string() });
        }
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if !self.cards[ia].is_connected_to(b) {
            self.cards[ia].connections.push(b.to_string());
        }
        if !self.cards[ib].is_connected_to(a) {
            self.cards[ib].connections.push(a.to_string());
        }
        Ok(())
    }

    /// Unlinks two cards on both endpoints, including one-sided leftovers.
    pub fn disconnect(&mut self, a: &str, b: &str) -> Result<()> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        self.cards[ia].connections.retain(|c| c != b);
        self.cards[ib].connections.retain(|c| c != a);
        Ok(())
    }

    /// Toggles the selection of `id`.
    pub fn select(&mut self, id: &str) -> Result<()> {
        self.index_of(id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn begin_drag(&mut self, id: &str) -> Result<()> {
        self.index_of(id)?;
        self.drag.begin(id);
        Ok(())
    }

    /// Moves the dragged card directly, bypassing the physics. Returns `false` when idle.
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let bounds = self.viewport.bounds();
        self.drag.move_to(&mut self.cards, &bounds, x, y)
    }

    pub fn end_drag(&mut self) -> Option<String> {
        self.drag.end(&mut self.cards)
    }

    /// Back to the example board.
    pub fn reset(&mut self) {
        tracing::info!("board reset to example");
        self.cards = example_cards();
        self.drag = DragState::Idle;
        self.selected = None;
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.cards
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::UnknownCard { id: id.to_string() })
    }
}
