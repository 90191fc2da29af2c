//! Engine error types.
//!
//! Two of these are recoverable by re-prompting the offending adapter
//! (`IllegalPlay`, `InvalidSelection`); `DeckExhausted` indicates a
//! caller/configuration bug, and `InconsistentState` an engine bug —
//! neither is ever recovered from mid-game. Scoring itself never fails:
//! any 4-or-5-card input has a defined (possibly zero) score.

use thiserror::Error;

use crate::cards::Card;

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A pegging play that is not legal: the card is not in the player's
    /// unplayed hand, or it would push the pile total over 31, or the
    /// player passed/played out of turn.
    #[error("illegal play of {card}: {reason}")]
    IllegalPlay { card: Card, reason: String },

    /// A player adapter returned a selection outside the legal set. Caller
    /// error, not game error: report back for re-prompting, never
    /// substitute a legal move silently.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// A deal requested more cards than remain in the deck (wrong player
    /// count or double-deal).
    #[error("deck exhausted: requested {requested} with {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },

    /// Internal invariant violation (a card in two places at once, a phase
    /// entered out of order). Always fatal.
    #[error("inconsistent engine state: {0}")]
    InconsistentState(String),
}

impl Error {
    /// Whether the caller may recover by re-prompting the adapter.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::IllegalPlay { .. } | Error::InvalidSelection(_))
    }
}
