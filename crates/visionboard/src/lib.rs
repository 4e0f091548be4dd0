#![forbid(unsafe_code)]

//! Vision board host around the `otter` layout engine.
//!
//! The board owns the card collection and everything the layout treats as an outside
//! collaborator: frame pacing, pointer dragging, card creation, relationship bookkeeping and
//! persistence.

pub mod board;
pub mod config;
pub mod drag;
pub mod error;
pub mod example;
pub mod factory;
pub mod store;
pub mod throttle;

pub use board::{Board, CardPatch};
pub use config::BoardConfig;
pub use drag::DragState;
pub use error::{Error, Result};
pub use example::example_cards;
pub use factory::{CardDraft, CardFactory};
pub use store::{BoardStore, JsonFileStore, cards_from_json_str};
pub use throttle::FrameThrottle;

pub use otter::{Card, CardKind, PhysicsConfig, SwayPhase, Viewport};
