//! Card system: identity, deck, and per-round hands.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`, `Card`: immutable card identity; `Card::value()` is
//!   the scoring value (face = 10), `Card::run_order()` the 1..13 position
//!   used for runs and sorting
//! - `Deck`: the 52 distinct cards, seeded shuffle, deal-once consumption
//! - `Hand`: one player's cards for one round, split unplayed/played

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::Deck;
pub use hand::Hand;
