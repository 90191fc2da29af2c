//! The pegging phase as a state machine.
//!
//! One `PeggingRound` owns the players' hands for the duration of the
//! play phase. Players alternate `play` and `go` in seat order; the
//! engine tracks the pile, per-player passed flags for the current
//! sub-round, and the last successful pegger (who collects "go" and
//! "last card" points). The pile retires whenever it reaches exactly 31
//! or every player still holding cards has passed or cannot play.
//!
//! `Card` is `Copy`: the pile and retired list hold scoring views, while
//! ownership stays with each `Hand`'s played partition.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Hand};
use crate::core::error::Error;
use crate::core::player::{PlayerId, PlayerMap};
use crate::scoring::{pile_total, score_pile, Breakdown};

/// Observable state of the pegging round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Cards are being played onto the current pile.
    Active,
    /// At least one player has passed this sub-round.
    GoPending,
    /// The pile just retired; the next play opens a fresh pile.
    PileReset,
    /// Every hand is empty; pegging is over.
    Exhausted,
}

/// What a successful play produced.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayOutcome {
    pub card: Card,
    /// Pile total the instant the card landed (before any reset).
    pub pile_total: u8,
    /// Points earned by the card (15, pairs, runs, 31).
    pub points: u8,
    pub breakdown: Breakdown,
    /// Go point automatically awarded because this play left nobody able
    /// to act (the pile then reset).
    pub go_point_to: Option<PlayerId>,
    /// The pile retired after this play (31, or the automatic go above).
    pub pile_reset: bool,
    /// "Last card" point: this play emptied the final hand without
    /// reaching 31.
    pub last_card_to: Option<PlayerId>,
    /// Next player to act, or `None` when pegging is over.
    pub next: Option<PlayerId>,
}

/// What a "go" produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoOutcome {
    /// Go point to the last pegger, when this pass closed the sub-round.
    pub go_point_to: Option<PlayerId>,
    pub pile_reset: bool,
    pub next: Option<PlayerId>,
}

/// Turn-based pegging engine for one round.
#[derive(Clone, Debug)]
pub struct PeggingRound {
    hands: PlayerMap<Hand>,
    pile: SmallVec<[Card; 8]>,
    retired: Vec<Card>,
    passed: PlayerMap<bool>,
    turn: PlayerId,
    last_pegger: Option<PlayerId>,
    phase: Phase,
}

impl PeggingRound {
    /// Start the pegging phase. `first` is the player left of the dealer.
    #[must_use]
    pub fn new(hands: PlayerMap<Hand>, first: PlayerId) -> Self {
        let player_count = hands.player_count();
        let phase = if hands.iter().all(|(_, h)| h.is_exhausted()) {
            Phase::Exhausted
        } else {
            Phase::Active
        };
        Self {
            hands,
            pile: SmallVec::new(),
            retired: Vec::new(),
            passed: PlayerMap::with_value(player_count, false),
            turn: first,
            last_pegger: None,
            phase,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose turn it is to play or go.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// The current pile, oldest first.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Running total of the current pile.
    #[must_use]
    pub fn total(&self) -> u8 {
        pile_total(&self.pile)
    }

    /// Cards from piles already retired this round.
    #[must_use]
    pub fn retired(&self) -> &[Card] {
        &self.retired
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Last player to successfully play a card.
    #[must_use]
    pub fn last_pegger(&self) -> Option<PlayerId> {
        self.last_pegger
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// Reclaim the hands after pegging (for the counting phase).
    #[must_use]
    pub fn into_hands(self) -> PlayerMap<Hand> {
        self.hands
    }

    /// The player's unplayed cards that fit under the 31 cap. Empty means
    /// the only legal action is "go".
    #[must_use]
    pub fn legal_plays(&self, player: PlayerId) -> SmallVec<[Card; 4]> {
        let total = self.total();
        self.hands[player]
            .unplayed()
            .iter()
            .copied()
            .filter(|c| total + c.value() <= 31)
            .collect()
    }

    /// Play `card` for `player`: validate, move unplayed → played, score
    /// at the instant, and advance the state machine.
    pub fn play(&mut self, player: PlayerId, card: Card) -> Result<PlayOutcome, Error> {
        if self.phase == Phase::Exhausted {
            return Err(Error::IllegalPlay {
                card,
                reason: "pegging is already over".into(),
            });
        }
        if player != self.turn {
            return Err(Error::IllegalPlay {
                card,
                reason: format!("it is not {}'s turn", player),
            });
        }
        if !self.hands[player].contains(card) {
            return Err(Error::IllegalPlay {
                card,
                reason: "not among the player's unplayed cards".into(),
            });
        }
        if self.total() + card.value() > 31 {
            return Err(Error::IllegalPlay {
                card,
                reason: format!("would push the pile past 31 (total {})", self.total()),
            });
        }

        self.hands[player].play(card)?;
        self.pile.push(card);
        self.last_pegger = Some(player);

        let breakdown = score_pile(&self.pile);
        let points = breakdown.total();
        let total = self.total();
        log::debug!("{} pegs {} for {} (pile {})", player, card, points, total);

        let all_exhausted = self.hands.iter().all(|(_, h)| h.is_exhausted());

        if total == 31 {
            // 31 retires the pile; the bonus replaces any go point.
            self.retire_pile();
            let next = self.next_holding_cards_after(player);
            if let Some(next) = next {
                self.turn = next;
            }
            self.phase = if all_exhausted { Phase::Exhausted } else { Phase::PileReset };
            return Ok(PlayOutcome {
                card,
                pile_total: total,
                points,
                breakdown,
                go_point_to: None,
                pile_reset: true,
                last_card_to: None,
                next,
            });
        }

        if all_exhausted {
            self.phase = Phase::Exhausted;
            return Ok(PlayOutcome {
                card,
                pile_total: total,
                points,
                breakdown,
                go_point_to: None,
                pile_reset: false,
                last_card_to: Some(player),
                next: None,
            });
        }

        match self.next_actionable_after(player) {
            Some(next) => {
                self.turn = next;
                self.phase = if self.any_passed() { Phase::GoPending } else { Phase::Active };
                Ok(PlayOutcome {
                    card,
                    pile_total: total,
                    points,
                    breakdown,
                    go_point_to: None,
                    pile_reset: false,
                    last_card_to: None,
                    next: Some(next),
                })
            }
            None => {
                // Everyone still holding cards has passed: the sub-round
                // closes on this play.
                let scorer = player;
                self.retire_pile();
                let next = self.next_holding_cards_after(scorer);
                self.phase = Phase::PileReset;
                if let Some(next) = next {
                    self.turn = next;
                }
                Ok(PlayOutcome {
                    card,
                    pile_total: total,
                    points,
                    breakdown,
                    go_point_to: Some(scorer),
                    pile_reset: true,
                    last_card_to: None,
                    next,
                })
            }
        }
    }

    /// Declare "go" for `player`. Only legal on their turn, with cards in
    /// hand but no legal play.
    pub fn go(&mut self, player: PlayerId) -> Result<GoOutcome, Error> {
        if self.phase == Phase::Exhausted {
            return Err(Error::InvalidSelection("pegging is already over".into()));
        }
        if player != self.turn {
            return Err(Error::InvalidSelection(format!("it is not {}'s turn", player)));
        }
        if self.hands[player].is_exhausted() {
            return Err(Error::InconsistentState(format!(
                "{} has no cards yet was asked to act",
                player
            )));
        }
        if !self.legal_plays(player).is_empty() {
            return Err(Error::InvalidSelection(
                "cannot say go with a legal play available".into(),
            ));
        }

        self.passed[player] = true;
        log::debug!("{} says go (pile {})", player, self.total());

        match self.next_actionable_after(player) {
            Some(next) => {
                self.turn = next;
                self.phase = Phase::GoPending;
                Ok(GoOutcome {
                    go_point_to: None,
                    pile_reset: false,
                    next: Some(next),
                })
            }
            None => {
                let scorer = self.last_pegger.ok_or_else(|| {
                    Error::InconsistentState("go resolved before any card was pegged".into())
                })?;
                self.retire_pile();
                let next = self.next_holding_cards_after(scorer);
                self.phase = Phase::PileReset;
                if let Some(next) = next {
                    self.turn = next;
                }
                Ok(GoOutcome {
                    go_point_to: Some(scorer),
                    pile_reset: true,
                    next,
                })
            }
        }
    }

    /// Retire the current pile and clear the sub-round passed flags.
    fn retire_pile(&mut self) {
        self.retired.extend(self.pile.drain(..));
        for (_, flag) in self.passed.iter_mut() {
            *flag = false;
        }
    }

    fn any_passed(&self) -> bool {
        self.passed.iter().any(|(_, &p)| p)
    }

    /// Next player in seat order (strictly after `player`, wrapping, the
    /// player themself considered last) who holds cards and has not
    /// passed this sub-round.
    fn next_actionable_after(&self, player: PlayerId) -> Option<PlayerId> {
        let n = self.hands.player_count();
        (1..=n)
            .map(|step| PlayerId::new(((player.index() + step) % n) as u8))
            .find(|&p| !self.hands[p].is_exhausted() && !self.passed[p])
    }

    /// Next player in seat order after `player` who still holds cards.
    fn next_holding_cards_after(&self, player: PlayerId) -> Option<PlayerId> {
        let n = self.hands.player_count();
        (1..=n)
            .map(|step| PlayerId::new(((player.index() + step) % n) as u8))
            .find(|&p| !self.hands[p].is_exhausted())
    }
}
