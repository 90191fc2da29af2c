//! Discard (lay-away) recommendations.
//!
//! For each candidate 2-card discard from a dealt hand, enumerate every
//! possible starter among the unseen cards and score the kept four
//! against it; the discards themselves contribute crib potential, added
//! when the crib is ours and subtracted when it is the opponent's. The
//! enumeration is exhaustive and deterministic: same input, same ranked
//! list.

use rustc_hash::FxHashSet;

use crate::advisor::outcome::OutcomeSummary;
use crate::cards::{Card, Deck};
use crate::scoring::{score_fifteens, score_hand, score_nobs, score_pairs, score_runs};

/// A ranked candidate discard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscardRecommendation {
    /// The two cards to lay away, in canonical order.
    pub discard: (Card, Card),
    /// Net-score statistics over all enumerated starters.
    pub summary: OutcomeSummary,
}

/// Rank every 2-card discard from `dealt`, best expected net score first.
///
/// `my_crib` flips the sign of the crib contribution. Ties in expected
/// value break on the candidate cards themselves so the ordering is
/// reproducible.
#[must_use]
pub fn recommend_discard(dealt: &[Card], my_crib: bool) -> Vec<DiscardRecommendation> {
    let unseen = unseen_cards(dealt);
    let mut recommendations = Vec::new();

    for i in 0..dealt.len() {
        for j in (i + 1)..dealt.len() {
            let (first, second) = ordered_pair(dealt[i], dealt[j]);
            let kept: Vec<Card> = dealt
                .iter()
                .enumerate()
                .filter(|&(ix, _)| ix != i && ix != j)
                .map(|(_, &c)| c)
                .collect();

            let outcomes = unseen.iter().map(|&starter| {
                let hand_points = i32::from(score_hand(&kept, starter).total());
                let crib_points = i32::from(crib_potential(first, second, starter));
                if my_crib {
                    hand_points + crib_points
                } else {
                    hand_points - crib_points
                }
            });

            // The unseen set is never empty for a real deal (52 - 6).
            if let Some(summary) = OutcomeSummary::from_outcomes(outcomes) {
                recommendations.push(DiscardRecommendation {
                    discard: (first, second),
                    summary,
                });
            }
        }
    }

    recommendations.sort_by(|a, b| {
        b.summary
            .expected
            .partial_cmp(&a.summary.expected)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.discard.cmp(&b.discard))
    });
    log::trace!(
        "ranked {} discard candidates over {} unseen starters",
        recommendations.len(),
        unseen.len()
    );
    recommendations
}

/// Cards not visible to the player holding `dealt`, in canonical deck
/// order (determinism).
fn unseen_cards(dealt: &[Card]) -> Vec<Card> {
    let seen: FxHashSet<Card> = dealt.iter().copied().collect();
    let mut deck = Deck::new();
    deck.deal(52)
        .expect("full deck")
        .into_iter()
        .filter(|c| !seen.contains(c))
        .collect()
}

/// What the two discards are worth inside a crib that also holds this
/// starter: rank-only points (fifteens, pairs, a 3-run) plus nobs. The
/// opponent's discards are unknown, so this is the knowable floor of the
/// crib's value, evaluated per starter to keep one outcome per
/// enumeration.
fn crib_potential(first: Card, second: Card, starter: Card) -> u8 {
    let trio = [first, second, starter];
    let pair = [first, second];
    score_fifteens(&trio) + score_pairs(&trio) + score_runs(&trio) + score_nobs(&pair, starter)
}

fn ordered_pair(a: Card, b: Card) -> (Card, Card) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
