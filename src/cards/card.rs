//! Card identity: rank, suit, and the two notions of "value".
//!
//! Cribbage distinguishes a card's *scoring value* (face cards count 10,
//! ace counts 1 — used for fifteens and the 31 cap) from its *run order*
//! (ace through king, 1..13 — used for runs and sorting). `Rank` exposes
//! both so scoring code never conflates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card rank, ace low (cribbage has no ace-high rules).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// All thirteen ranks in run order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in a run, 1 (ace) through 13 (king).
    #[must_use]
    pub const fn run_order(self) -> u8 {
        self as u8
    }

    /// Scoring value: face cards count 10, everything else its run order.
    #[must_use]
    pub const fn value(self) -> u8 {
        let order = self as u8;
        if order > 10 {
            10
        } else {
            order
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        write!(f, "{}", s)
    }
}

/// Card suit. Ordering (clubs < diamonds < hearts < spades) only matters
/// for canonical display sorts; no suit outranks another in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        };
        write!(f, "{}", s)
    }
}

/// An immutable playing card. Equality is rank + suit; ordering is rank
/// then suit, which gives the canonical display sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card from rank and suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Scoring value (face = 10, ace = 1).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Run-order position (1..13), for run detection and sorting.
    #[must_use]
    pub const fn run_order(self) -> u8 {
        self.rank.run_order()
    }

    #[must_use]
    pub const fn is_jack(self) -> bool {
        matches!(self.rank, Rank::Jack)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parse failure for the two-character card notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCardError(String);

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card notation: {:?}", self.0)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse two-character notation: `"5H"`, `"TD"`, `"JC"`, `"AS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());
        let mut chars = s.chars();
        let (r, u) = (chars.next().ok_or_else(err)?, chars.next().ok_or_else(err)?);
        if chars.next().is_some() {
            return Err(err());
        }
        let rank = match r.to_ascii_uppercase() {
            'A' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            _ => return Err(err()),
        };
        let suit = match u.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(err()),
        };
        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Nine.value(), 9);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
    }

    #[test]
    fn test_run_order_distinct_from_value() {
        assert_eq!(Rank::Jack.run_order(), 11);
        assert_eq!(Rank::Queen.run_order(), 12);
        assert_eq!(Rank::King.run_order(), 13);
    }

    #[test]
    fn test_ordering_rank_then_suit() {
        let mut cards = vec![
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
        ];
        cards.sort();
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(cards[1], Card::new(Rank::Five, Suit::Clubs));
        assert_eq!(cards[2], Card::new(Rank::Five, Suit::Spades));
    }

    #[test]
    fn test_display_round_trip() {
        for &rank in &Rank::ALL {
            for &suit in &Suit::ALL {
                let card = Card::new(rank, suit);
                let parsed: Card = card.to_string().parse().unwrap();
                assert_eq!(card, parsed);
            }
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("5X".parse::<Card>().is_err());
        assert!("ZH".parse::<Card>().is_err());
        assert!("5".parse::<Card>().is_err());
        assert!("5HH".parse::<Card>().is_err());
    }

    #[test]
    fn test_is_jack() {
        assert!(Card::new(Rank::Jack, Suit::Hearts).is_jack());
        assert!(!Card::new(Rank::Queen, Suit::Hearts).is_jack());
    }
}
