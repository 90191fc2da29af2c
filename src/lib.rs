//! # cribbage-engine
//!
//! Rules and decision engine for cribbage: scoring, pegging, full games,
//! and exhaustive play advice.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every shuffle and cut draws from a caller-seeded
//!    `GameRng`; a seed replays a game bit-for-bit. Advice is a pure
//!    function of the visible cards.
//!
//! 2. **Rules in One Place**: Scoring functions are pure and shared by
//!    the game loop, the heuristics, and the advisor, so they can never
//!    disagree about what a hand is worth.
//!
//! 3. **Decisions at the Seam**: The engine never chooses for a player.
//!    All choices flow through `PlayerAdapter`, and a bad answer is an
//!    error surfaced to the caller, not a silent correction.
//!
//! ## Modules
//!
//! - `cards`: ranks, suits, the deck, per-round hands
//! - `scoring`: hand/crib scoring and pegging-pile scoring, itemized
//! - `pegging`: the play phase as a turn-based state machine
//! - `game`: full-game orchestration, events, win detection
//! - `advisor`: exhaustive discard and play recommendations
//! - `players`: the `PlayerAdapter` seam plus built-in opponents
//! - `core`: player IDs, seeded RNG, errors, the event stream

pub mod advisor;
pub mod cards;
pub mod core;
pub mod game;
pub mod pegging;
pub mod players;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Error, EventLog, EventSink, GameEvent, GameRng, GameRngState, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, Deck, Hand, Rank, Suit};

pub use crate::scoring::{score_crib, score_hand, score_pile, Breakdown};

pub use crate::pegging::{PeggingRound, Phase};

pub use crate::game::{Classification, Config, Game, GameResult};

pub use crate::advisor::{recommend_discard, recommend_play};

pub use crate::players::{
    AdvisorPlayer, GreedyPlayer, HeuristicPlayer, PlayChoice, PlayerAdapter,
};
