//! Itemized score breakdowns.
//!
//! Every scorer returns a `Breakdown` rather than a bare total so that
//! consumers (display, tests, the event log) can see *why* points were
//! awarded. The breakdown is part of the contract, not a debugging aid.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Rank;

/// Why a group of points was awarded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// Subsets of the counted cards summing to fifteen, 2 points each.
    Fifteens { count: u8 },
    /// All pairings within `count` cards of one rank: 2 × C(count, 2).
    Pairs { rank: Rank, count: u8 },
    /// A maximal run of `length` consecutive ranks, `multiplicity` ways
    /// (double run = 2, triple run = 3, double-double = 4).
    Run { length: u8, multiplicity: u8 },
    /// Hand flush: 4 matching suits, 5 if the starter matches too.
    Flush { cards: u8 },
    /// The jack matching the starter's suit.
    Nobs,
    /// Pegging pile total hit exactly fifteen.
    PegFifteen,
    /// Pegging pile total hit exactly thirty-one.
    PegThirtyOne,
    /// Trailing same-rank cards on the pile (pair, triple, quadruple).
    PegPair { size: u8 },
    /// Trailing cards of the pile form a run of `length` in any order.
    PegRun { length: u8 },
}

/// One scored component: a reason and its points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreItem {
    pub reason: Reason,
    pub points: u8,
}

/// An ordered, itemized score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    items: Vec<ScoreItem>,
}

impl Breakdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, reason: Reason, points: u8) {
        self.items.push(ScoreItem { reason, points });
    }

    #[must_use]
    pub fn items(&self) -> &[ScoreItem] {
        &self.items
    }

    /// Sum of all component points.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.items.iter().map(|i| i.points).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for ScoreItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            Reason::Fifteens { count: 1 } => write!(f, "Fifteen for 2"),
            Reason::Fifteens { count } => write!(f, "{} fifteens for {}", count, self.points),
            Reason::Pairs { rank, count: 2 } => write!(f, "A pair of {}s for 2", rank),
            Reason::Pairs { rank, count: 3 } => write!(f, "Three {}s for 6", rank),
            Reason::Pairs { rank, count: _ } => write!(f, "Four {}s for 12", rank),
            Reason::Run { length, multiplicity: 1 } => {
                write!(f, "A run of {} for {}", length, self.points)
            }
            Reason::Run { length, multiplicity } => {
                write!(f, "{} runs of {} for {}", multiplicity, length, self.points)
            }
            Reason::Flush { cards } => write!(f, "A flush for {}", cards),
            Reason::Nobs => write!(f, "Nobs for 1"),
            Reason::PegFifteen => write!(f, "Fifteen for 2"),
            Reason::PegThirtyOne => write!(f, "Thirty-one for 2"),
            Reason::PegPair { size: 2 } => write!(f, "Pair for 2"),
            Reason::PegPair { size: 3 } => write!(f, "Three of a kind for 6"),
            Reason::PegPair { size: _ } => write!(f, "Four of a kind for 12"),
            Reason::PegRun { length } => write!(f, "A run of {0} for {0}", length),
        }
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "no score");
        }
        for (ix, item) in self.items.iter().enumerate() {
            if ix > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, " ({} total)", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_items() {
        let mut b = Breakdown::new();
        b.push(Reason::Fifteens { count: 2 }, 4);
        b.push(Reason::Nobs, 1);
        assert_eq!(b.total(), 5);
        assert_eq!(b.items().len(), 2);
    }

    #[test]
    fn test_empty_breakdown() {
        let b = Breakdown::new();
        assert_eq!(b.total(), 0);
        assert!(b.is_empty());
        assert_eq!(b.to_string(), "no score");
    }

    #[test]
    fn test_display_phrasing() {
        let mut b = Breakdown::new();
        b.push(Reason::Fifteens { count: 1 }, 2);
        b.push(
            Reason::Pairs {
                rank: Rank::Five,
                count: 2,
            },
            2,
        );
        let s = b.to_string();
        assert!(s.contains("Fifteen for 2"));
        assert!(s.contains("A pair of 5s for 2"));
        assert!(s.contains("(4 total)"));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut b = Breakdown::new();
        b.push(Reason::Run { length: 3, multiplicity: 2 }, 6);
        let json = serde_json::to_string(&b).unwrap();
        let back: Breakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
