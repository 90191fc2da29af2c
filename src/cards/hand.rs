//! A player's hand for one round.
//!
//! Over a round the hand partitions into *unplayed* and *played* cards.
//! Exactly two mutations exist: `lay_away` (discard to the crib, before
//! pegging) and `play` (pegging, unplayed → played). The hand is rebuilt
//! from a fresh deal next round.

use smallvec::SmallVec;

use crate::cards::card::Card;
use crate::core::error::Error;

/// Cards dealt to one player, split into unplayed/played for pegging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    unplayed: SmallVec<[Card; 6]>,
    played: SmallVec<[Card; 6]>,
}

impl Hand {
    /// Build a hand from dealt cards, sorted canonically.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut unplayed: SmallVec<[Card; 6]> = cards.into_iter().collect();
        unplayed.sort();
        Self {
            unplayed,
            played: SmallVec::new(),
        }
    }

    /// Cards not yet played this round, sorted.
    #[must_use]
    pub fn unplayed(&self) -> &[Card] {
        &self.unplayed
    }

    /// Cards played to the pegging pile this round, in play order.
    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// Every card still owned by this hand, sorted (for counting and
    /// conservation checks).
    #[must_use]
    pub fn all(&self) -> SmallVec<[Card; 6]> {
        let mut cards: SmallVec<[Card; 6]> = self.unplayed.iter().chain(&self.played).copied().collect();
        cards.sort();
        cards
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.unplayed.contains(&card)
    }

    /// True once every card has been played.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.unplayed.is_empty()
    }

    /// Remove two distinct cards for the crib. Only legal before any card
    /// has been played.
    pub fn lay_away(&mut self, first: Card, second: Card) -> Result<(Card, Card), Error> {
        if first == second {
            return Err(Error::InvalidSelection(format!(
                "lay-away cards must be distinct, got {} twice",
                first
            )));
        }
        if !self.played.is_empty() {
            return Err(Error::InconsistentState(
                "lay-away after pegging has begun".into(),
            ));
        }
        for card in [first, second] {
            if !self.unplayed.contains(&card) {
                return Err(Error::InvalidSelection(format!("{} is not in hand", card)));
            }
        }
        self.unplayed.retain(|&mut c| c != first && c != second);
        Ok((first, second))
    }

    /// Move a card from unplayed to played (a pegging play).
    pub fn play(&mut self, card: Card) -> Result<(), Error> {
        match self.unplayed.iter().position(|&c| c == card) {
            Some(ix) => {
                self.unplayed.remove(ix);
                self.played.push(card);
                Ok(())
            }
            None => Err(Error::IllegalPlay {
                card,
                reason: "not among the player's unplayed cards".into(),
            }),
        }
    }
}
