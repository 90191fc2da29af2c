//! The 52-card deck: seeded shuffle, deal-once consumption, cuts.

use crate::cards::card::{Card, Rank, Suit};
use crate::core::error::Error;
use crate::core::rng::GameRng;

/// A deck of cards, consumed from the front as it deals.
///
/// One deck serves one round: dealing removes cards, so a card can never
/// appear in two hands (or the crib and a hand) within a round. A fresh
/// round starts from a fresh shuffled deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full deck in canonical (unshuffled) order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// A full deck in a fair random order drawn from `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return `n` cards from the front of the deck.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, Error> {
        if n > self.cards.len() {
            return Err(Error::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Remove and return the front card.
    pub fn deal_one(&mut self) -> Result<Card, Error> {
        Ok(self.deal(1)?[0])
    }

    /// Look at a card from a random position without removing it, as in
    /// the cut for deal. Returns `None` on an empty deck.
    pub fn cut(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let ix = rng.gen_range(0..self.cards.len());
        Some(self.cards[ix])
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_deck_is_52_unique() {
        let mut deck = Deck::new();
        let cards = deck.deal(52).unwrap();
        let unique: HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), 52);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_unshuffled_order_starts_ace_of_clubs() {
        let mut deck = Deck::new();
        let first = deck.deal_one().unwrap();
        assert_eq!(first, Card::new(Rank::Ace, Suit::Clubs));
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let a = Deck::shuffled(&mut GameRng::new(42));
        let b = Deck::shuffled(&mut GameRng::new(42));
        let c = Deck::shuffled(&mut GameRng::new(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deal_consumes_without_duplication() {
        let mut deck = Deck::shuffled(&mut GameRng::new(7));
        let hand_a = deck.deal(6).unwrap();
        let hand_b = deck.deal(6).unwrap();
        let starter = deck.deal_one().unwrap();
        assert_eq!(deck.len(), 52 - 13);

        let mut seen: HashSet<Card> = hand_a.into_iter().collect();
        for card in hand_b {
            assert!(seen.insert(card));
        }
        assert!(seen.insert(starter));
    }

    #[test]
    fn test_deal_past_end_is_deck_exhausted() {
        let mut deck = Deck::new();
        deck.deal(50).unwrap();
        let err = deck.deal(3).unwrap_err();
        assert_eq!(err, Error::DeckExhausted { requested: 3, remaining: 2 });
    }

    #[test]
    fn test_cut_does_not_consume() {
        let mut deck = Deck::shuffled(&mut GameRng::new(1));
        let mut rng = GameRng::new(99);
        let before = deck.len();
        let card = deck.cut(&mut rng).unwrap();
        assert_eq!(deck.len(), before);
        // The cut card is still somewhere in the deck.
        let rest = deck.deal(before).unwrap();
        assert!(rest.contains(&card));
    }
}
