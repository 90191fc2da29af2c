//! Full-game state machine: rounds, the crib, counting order, winning.
//!
//! ## Key Types
//!
//! - `Game`: drives a complete game against a set of `PlayerAdapter`s
//! - `Config`: seed, target score, deal shape
//! - `GameResult` / `Classification`: who won, by how much, and whether
//!   it was a skunk

pub mod config;
pub mod engine;
pub mod result;

pub use config::Config;
pub use engine::Game;
pub use result::{Classification, GameResult, DOUBLE_SKUNK_MARGIN, SKUNK_MARGIN};
