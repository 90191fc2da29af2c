//! Game event surface.
//!
//! Everything observable that happens in a game is emitted as a
//! `GameEvent`, in order, into the game's own log and to any subscribed
//! `EventSink`. A GUI, a console renderer, and a headless tournament
//! harness all consume the identical stream; the core never depends on a
//! consumer existing.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::player::PlayerId;
use crate::game::Classification;
use crate::scoring::Breakdown;

/// A discrete, ordered game event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player cut the deck during the cut-for-deal; lowest card deals.
    CutForDeal { player: PlayerId, card: Card },
    /// Hands are dealt; `dealer` owns the crib this round.
    HandDealt { dealer: PlayerId },
    /// The starter card was cut.
    CardCut { starter: Card },
    /// The starter was a jack: two points to the dealer.
    HisHeels { dealer: PlayerId },
    /// A pegging card was played, with the points it earned at that
    /// instant (possibly zero) and why.
    CardPlayed {
        player: PlayerId,
        card: Card,
        pile_total: u8,
        points: u8,
        breakdown: Breakdown,
    },
    /// A player with no legal play said "go".
    Go { player: PlayerId },
    /// One point to the last pegger after everyone said "go".
    GoPoint { player: PlayerId },
    /// The pegging pile was retired (31 reached or go resolved).
    PileReset,
    /// One point for playing the final card of the pegging phase.
    LastCard { player: PlayerId },
    /// A hand was counted.
    HandScored {
        player: PlayerId,
        points: u8,
        breakdown: Breakdown,
    },
    /// The crib was counted for the dealer.
    CribScored {
        dealer: PlayerId,
        points: u8,
        breakdown: Breakdown,
    },
    /// All counting for the round is done and the deal is about to
    /// rotate. Not emitted when the game ends mid-round.
    RoundOver,
    /// A player reached the target score.
    GameOver {
        winner: PlayerId,
        margin: u32,
        classification: Classification,
    },
}

impl GameEvent {
    /// Points this event awarded, if it is a scoring event.
    #[must_use]
    pub fn points(&self) -> Option<u8> {
        match self {
            GameEvent::HisHeels { .. } => Some(2),
            GameEvent::CardPlayed { points, .. } => Some(*points),
            GameEvent::GoPoint { .. } | GameEvent::LastCard { .. } => Some(1),
            GameEvent::HandScored { points, .. } | GameEvent::CribScored { points, .. } => {
                Some(*points)
            }
            _ => None,
        }
    }
}

/// Observer seam for event consumers.
///
/// Sinks are notified synchronously, in emission order, on the game's
/// thread. Implementations must not call back into the game.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// A sink that just records the stream, for harnesses and tests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_extraction() {
        assert_eq!(GameEvent::HisHeels { dealer: PlayerId::new(0) }.points(), Some(2));
        assert_eq!(GameEvent::GoPoint { player: PlayerId::new(1) }.points(), Some(1));
        assert_eq!(GameEvent::PileReset.points(), None);
        assert_eq!(GameEvent::RoundOver.points(), None);
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_event(&GameEvent::RoundOver);
        log.on_event(&GameEvent::PileReset);
        assert_eq!(log.events().len(), 2);
        assert_eq!(log.events()[0], GameEvent::RoundOver);
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = GameEvent::Go { player: PlayerId::new(1) };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
