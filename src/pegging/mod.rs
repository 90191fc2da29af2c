//! The pegging (play) phase state machine.
//!
//! ## Key Types
//!
//! - `PeggingRound`: owns the hands for the round; `play` / `go` drive
//!   the machine through `Active`, `GoPending`, `PileReset`, `Exhausted`
//! - `PlayOutcome` / `GoOutcome`: everything a transition produced
//!   (points, resets, who acts next), so the game layer can emit events
//!   and apply scores without peeking inside

pub mod round;

pub use round::{GoOutcome, PeggingRound, Phase, PlayOutcome};
