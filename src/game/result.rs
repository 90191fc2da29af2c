//! Final game outcome.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Losing margin at or past this is a skunk.
pub const SKUNK_MARGIN: u32 = 31;
/// Losing margin at or past this is a double skunk.
pub const DOUBLE_SKUNK_MARGIN: u32 = 61;

/// How decisively the game was won, derived from the winning margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Normal,
    Skunk,
    DoubleSkunk,
}

impl Classification {
    /// Classify a win by the margin over the best-placed loser.
    #[must_use]
    pub fn from_margin(margin: u32) -> Self {
        if margin >= DOUBLE_SKUNK_MARGIN {
            Classification::DoubleSkunk
        } else if margin >= SKUNK_MARGIN {
            Classification::Skunk
        } else {
            Classification::Normal
        }
    }
}

/// Outcome of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    /// Final scores in seat order. Scores past the target are kept as-is.
    pub scores: Vec<u32>,
    /// Winner's lead over the best-placed loser.
    pub margin: u32,
    pub classification: Classification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(Classification::from_margin(0), Classification::Normal);
        assert_eq!(Classification::from_margin(30), Classification::Normal);
        assert_eq!(Classification::from_margin(31), Classification::Skunk);
        assert_eq!(Classification::from_margin(60), Classification::Skunk);
        assert_eq!(Classification::from_margin(61), Classification::DoubleSkunk);
        assert_eq!(Classification::from_margin(121), Classification::DoubleSkunk);
    }
}
