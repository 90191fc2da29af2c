//! Core engine types: players, RNG, errors, events.
//!
//! These are the ambient building blocks every other module leans on;
//! none of them knows a cribbage rule.

pub mod error;
pub mod event;
pub mod player;
pub mod rng;

pub use error::Error;
pub use event::{EventLog, EventSink, GameEvent};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
