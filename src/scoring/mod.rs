//! Pure scoring: hands, crib, and pegging piles.
//!
//! ## Key Types
//!
//! - `Breakdown` / `ScoreItem` / `Reason`: itemized scores — the
//!   itemization is part of the contract, tests and the event log rely
//!   on it
//! - `score_hand` / `score_crib`: fifteens + pairs + runs + flush + nobs
//! - `score_pile` / `score_pile_with`: points earned by the newest card
//!   of a pegging pile
//!
//! Everything here is side-effect free and order-insensitive (for hands)
//! or backward-looking only (for piles).

pub mod breakdown;
pub mod hand;
pub mod pegging;

pub use breakdown::{Breakdown, Reason, ScoreItem};
pub use hand::{
    count_fifteens, score_crib, score_fifteens, score_flush, score_hand, score_nobs, score_pairs,
    score_runs,
};
pub use pegging::{pile_total, score_pile, score_pile_with};
