//! Pegging play recommendations.
//!
//! For each legal card, take the immediate deterministic points and then
//! enumerate every unseen card as the opponent's reply: each legal reply
//! is one outcome (our points minus the reply's points); a position with
//! no legal reply is a single outcome worth our points plus the
//! guaranteed go point (omitted at exactly 31, where the bonus already
//! counted). Ties in expected value prefer plays that avoid
//! leaving the pile at a total an opponent can exploit (5 or 21, setting
//! up a 15 or 31).

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::advisor::outcome::OutcomeSummary;
use crate::cards::{Card, Deck};
use crate::scoring::{pile_total, score_pile_with};

/// A ranked candidate pegging play.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayRecommendation {
    pub card: Card,
    /// Immediate points the card earns the instant it lands.
    pub immediate: u8,
    /// Net-point statistics over all enumerated opponent replies.
    pub summary: OutcomeSummary,
}

/// Rank every legal play from `unplayed` onto `pile`, best expected net
/// points first.
///
/// `seen` lists every other card visible to the player (starter, retired
/// piles); the player's own cards and the pile are excluded
/// automatically. Empty when nothing is legal — the caller must "go".
#[must_use]
pub fn recommend_play(unplayed: &[Card], pile: &[Card], seen: &[Card]) -> Vec<PlayRecommendation> {
    let total = pile_total(pile);
    let unseen = unseen_cards(unplayed, pile, seen);
    let mut recommendations = Vec::new();

    for &card in unplayed {
        if total + card.value() > 31 {
            continue;
        }
        let immediate = score_pile_with(pile, card).total();
        let mut after: SmallVec<[Card; 8]> = pile.iter().copied().collect();
        after.push(card);
        let after_total = total + card.value();

        let replies: Vec<i32> = unseen
            .iter()
            .filter(|u| after_total + u.value() <= 31)
            .map(|&u| i32::from(immediate) - i32::from(score_pile_with(&after, u).total()))
            .collect();

        let summary = if replies.is_empty() {
            // No legal reply: below 31 the go point is ours; at exactly
            // 31 the bonus is already in the immediate points.
            let bonus = i32::from(after_total < 31);
            OutcomeSummary::from_outcomes([i32::from(immediate) + bonus])
        } else {
            OutcomeSummary::from_outcomes(replies)
        }
        .expect("at least one outcome");

        recommendations.push(PlayRecommendation {
            card,
            immediate,
            summary,
        });
    }

    recommendations.sort_by(|a, b| {
        b.summary
            .expected
            .partial_cmp(&a.summary.expected)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                exposure_penalty(total + a.card.value()).cmp(&exposure_penalty(total + b.card.value()))
            })
            .then_with(|| a.card.cmp(&b.card))
    });
    log::trace!(
        "ranked {} pegging candidates over {} unseen cards",
        recommendations.len(),
        unseen.len()
    );
    recommendations
}

/// Totals that hand the opponent an easy 15 or 31.
fn exposure_penalty(total: u8) -> u8 {
    u8::from(total == 5 || total == 21)
}

fn unseen_cards(unplayed: &[Card], pile: &[Card], seen: &[Card]) -> Vec<Card> {
    let visible: FxHashSet<Card> = unplayed
        .iter()
        .chain(pile)
        .chain(seen)
        .copied()
        .collect();
    let mut deck = Deck::new();
    deck.deal(52)
        .expect("full deck")
        .into_iter()
        .filter(|c| !visible.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(specs: &[&str]) -> Vec<Card> {
        specs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_only_legal_cards_recommended() {
        let pile = cards(&["KH", "QC", "9D"]); // total 29
        let hand = cards(&["AS", "2S", "7S"]);
        let recs = recommend_play(&hand, &pile, &[]);
        let recommended: Vec<Card> = recs.iter().map(|r| r.card).collect();
        assert_eq!(recommended.len(), 2);
        assert!(recommended.contains(&card("AS")));
        assert!(recommended.contains(&card("2S")));
    }

    #[test]
    fn test_empty_when_nothing_legal() {
        let pile = cards(&["KH", "QC", "9D", "AC"]); // total 30
        let hand = cards(&["7S", "8S"]);
        assert!(recommend_play(&hand, &pile, &[]).is_empty());
    }

    #[test]
    fn test_immediate_points_reported() {
        let pile = cards(&["7H"]);
        let hand = cards(&["8C", "2D"]);
        let recs = recommend_play(&hand, &pile, &[]);
        let eight = recs.iter().find(|r| r.card == card("8C")).unwrap();
        assert_eq!(eight.immediate, 2); // fifteen
    }

    #[test]
    fn test_thirty_one_play_ranks_first() {
        let pile = cards(&["KH", "QC", "9D"]); // total 29
        let hand = cards(&["2S", "AS"]);
        let recs = recommend_play(&hand, &pile, &[]);
        // The 2 makes 31 for two points and no reply is possible.
        assert_eq!(recs[0].card, card("2S"));
        assert_eq!(recs[0].immediate, 2);
        // Exactly one outcome, and no phantom go point on top of the 31.
        assert_eq!(recs[0].summary.samples, 1);
        assert!((recs[0].summary.expected - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deterministic() {
        let pile = cards(&["4H"]);
        let hand = cards(&["5C", "6D", "TS", "JC"]);
        let a = recommend_play(&hand, &pile, &cards(&["2C"]));
        let b = recommend_play(&hand, &pile, &cards(&["2C"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_expected_is_mean_of_enumeration() {
        let pile = cards(&["3H"]);
        let hand = cards(&["9C", "TD"]);
        let recs = recommend_play(&hand, &pile, &[]);
        for rec in &recs {
            let mut after = pile.clone();
            after.push(rec.card);
            let after_total = pile_total(&after);
            let outcomes: Vec<i32> = unseen_cards(&hand, &pile, &[])
                .into_iter()
                .filter(|u| after_total + u.value() <= 31)
                .map(|u| i32::from(rec.immediate) - i32::from(score_pile_with(&after, u).total()))
                .collect();
            let mean = outcomes.iter().map(|&o| f64::from(o)).sum::<f64>() / outcomes.len() as f64;
            assert!((rec.summary.expected - mean).abs() < 1e-9);
            assert_eq!(u32::try_from(outcomes.len()).unwrap(), rec.summary.samples);
        }
    }

    #[test]
    fn test_tie_break_avoids_exploitable_totals() {
        // From an empty pile a 5 invites an instant 15; with no points on
        // offer anywhere, equal expectations should still push the 5 down
        // relative to an otherwise-equal card. Construct a direct check
        // of the penalty function instead of a full tie (full ties are
        // rare because unseen sets differ).
        assert_eq!(exposure_penalty(5), 1);
        assert_eq!(exposure_penalty(21), 1);
        assert_eq!(exposure_penalty(10), 0);
        assert_eq!(exposure_penalty(31), 0);
    }
}
