//! The decision seam between the engine and whoever is playing.

use crate::cards::Card;
use crate::core::player::PlayerId;

/// Everything a player may consult when choosing a lay-away.
#[derive(Clone, Copy, Debug)]
pub struct DiscardContext<'a> {
    pub player: PlayerId,
    /// The full dealt hand, sorted.
    pub dealt: &'a [Card],
    /// Whether this player owns the crib this round.
    pub my_crib: bool,
    /// Cumulative scores, indexed by player.
    pub scores: &'a [u32],
}

/// Everything a player may consult when choosing a pegging action.
#[derive(Clone, Copy, Debug)]
pub struct PlayContext<'a> {
    pub player: PlayerId,
    /// The player's remaining unplayed cards.
    pub unplayed: &'a [Card],
    /// The subset of `unplayed` that keeps the pile total within 31.
    /// Never empty: the engine says "go" on the player's behalf when
    /// nothing is legal.
    pub legal: &'a [Card],
    /// The current pile, oldest first.
    pub pile: &'a [Card],
    pub pile_total: u8,
    /// Other cards this player has seen this round (starter, retired
    /// piles).
    pub seen: &'a [Card],
    pub scores: &'a [u32],
}

/// A pegging decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayChoice {
    Play(Card),
    /// Decline to play. Only valid when no legal play exists, and the
    /// engine never asks in that case, so returning this from an adapter
    /// is always an `InvalidSelection`.
    Go,
}

/// A source of decisions for one seat.
///
/// The engine validates every answer: a discard not in the dealt hand or
/// a play outside the legal set surfaces as `Error::InvalidSelection` to
/// the caller of the game loop, never a silent correction.
pub trait PlayerAdapter {
    /// Pick exactly two cards from `ctx.dealt` for the crib.
    fn choose_discards(&mut self, ctx: &DiscardContext<'_>) -> (Card, Card);

    /// Pick a card from `ctx.legal`. Called only when `ctx.legal` is
    /// non-empty.
    fn choose_play(&mut self, ctx: &PlayContext<'_>) -> PlayChoice;
}
