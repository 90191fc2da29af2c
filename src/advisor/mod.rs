//! Decision support: exhaustive, deterministic enumeration of discard
//! and pegging choices.
//!
//! ## Key Types
//!
//! - `OutcomeSummary`: (min, max, expected) over an enumerated outcome set
//! - `DiscardRecommendation` / `recommend_discard`: which two cards to
//!   lay away, ranked by expected net score over every possible starter
//! - `PlayRecommendation` / `recommend_play`: which card to peg, ranked
//!   by expected net points over every unseen opponent reply
//!
//! Nothing here is randomized. Rankings depend only on the cards given,
//! so the same position always yields the same advice.

pub mod discard;
pub mod outcome;
pub mod play;

pub use discard::{recommend_discard, DiscardRecommendation};
pub use outcome::OutcomeSummary;
pub use play::{recommend_play, PlayRecommendation};
