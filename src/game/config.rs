//! Game configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters for a game. The defaults are standard cribbage;
/// builder methods exist mainly so tests and harnesses can shorten games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Seed for every shuffle and cut in the game.
    pub seed: u64,
    /// First score at or past this wins, instantly.
    pub target_score: u32,
    /// Cards dealt to each player.
    pub cards_dealt: usize,
    /// Cards each player lays away to the crib. `PlayerAdapter` chooses
    /// lay-aways as a pair, so `Game::new` rejects any value but 2.
    pub discards_to_crib: usize,
}

impl Config {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            target_score: 121,
            cards_dealt: 6,
            discards_to_crib: 2,
        }
    }

    #[must_use]
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    #[must_use]
    pub fn with_cards_dealt(mut self, cards_dealt: usize) -> Self {
        self.cards_dealt = cards_dealt;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(0)
    }
}
