//! Player seam and shipped strategies.
//!
//! ## Key Types
//!
//! - `PlayerAdapter`: the trait the game calls outward for decisions,
//!   with `DiscardContext` / `PlayContext` carrying everything a player
//!   is entitled to see
//! - `GreedyPlayer`, `HeuristicPlayer`, `AdvisorPlayer`: built-in
//!   opponents in ascending strength

pub mod adapter;
pub mod builtin;

pub use adapter::{DiscardContext, PlayChoice, PlayContext, PlayerAdapter};
pub use builtin::{AdvisorPlayer, GreedyPlayer, HeuristicPlayer};
