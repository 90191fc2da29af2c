//! Pegging pile scoring.
//!
//! Scores the points earned *by the newest card* of a pile: fifteen,
//! thirty-one, trailing pairs, and trailing runs. Points are awarded at
//! the instant a card lands, never retroactively, so these functions only
//! ever look backwards from the end of the pile.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::scoring::breakdown::{Breakdown, Reason};

/// Running total of a pile (scoring values, face = 10).
#[must_use]
pub fn pile_total(pile: &[Card]) -> u8 {
    pile.iter().map(|c| c.value()).sum()
}

/// Points earned by the last card of `pile`. Empty piles score nothing.
#[must_use]
pub fn score_pile(pile: &[Card]) -> Breakdown {
    let mut breakdown = Breakdown::new();
    let Some(&newest) = pile.last() else {
        return breakdown;
    };

    match pile_total(pile) {
        15 => breakdown.push(Reason::PegFifteen, 2),
        31 => breakdown.push(Reason::PegThirtyOne, 2),
        _ => {}
    }

    // Trailing cards of the newest card's rank.
    let same_rank = pile
        .iter()
        .rev()
        .take_while(|c| c.rank() == newest.rank())
        .count() as u8;
    if same_rank >= 2 {
        breakdown.push(Reason::PegPair { size: same_rank }, same_rank * (same_rank - 1));
    }

    // Longest trailing window whose ranks form a run in any order.
    for window in (3..=pile.len()).rev() {
        let tail = &pile[pile.len() - window..];
        if is_run(tail) {
            breakdown.push(Reason::PegRun { length: window as u8 }, window as u8);
            break;
        }
    }

    breakdown
}

/// Points that would be earned by appending `candidate` to `pile`. Used by
/// heuristics and the advisor; does not check the 31 bound.
#[must_use]
pub fn score_pile_with(pile: &[Card], candidate: Card) -> Breakdown {
    let mut hypothetical: SmallVec<[Card; 8]> = pile.iter().copied().collect();
    hypothetical.push(candidate);
    score_pile(&hypothetical)
}

/// Whether the cards' ranks are consecutive once sorted (distinct required).
fn is_run(cards: &[Card]) -> bool {
    let mut orders: SmallVec<[u8; 8]> = cards.iter().map(|c| c.run_order()).collect();
    orders.sort_unstable();
    orders.windows(2).all(|w| w[1] == w[0] + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pile(specs: &[&str]) -> Vec<Card> {
        specs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_empty_pile_scores_nothing() {
        assert!(score_pile(&[]).is_empty());
    }

    #[test]
    fn test_fifteen_scored_at_the_instant() {
        let p = pile(&["7H", "8C"]);
        let breakdown = score_pile(&p);
        assert_eq!(breakdown.total(), 2);
        assert!(breakdown.items().iter().any(|i| matches!(i.reason, Reason::PegFifteen)));
    }

    #[test]
    fn test_thirty_one_for_two() {
        let p = pile(&["KH", "QC", "9D", "2S"]);
        assert_eq!(pile_total(&p), 31);
        let breakdown = score_pile(&p);
        assert_eq!(breakdown.total(), 2);
        assert!(breakdown.items().iter().any(|i| matches!(i.reason, Reason::PegThirtyOne)));
    }

    #[test]
    fn test_trailing_pair_triple_quad() {
        assert_eq!(score_pile(&pile(&["3H", "8C", "8D"])).total(), 2);
        assert_eq!(score_pile(&pile(&["8H", "8C", "8D"])).total(), 6);
        let quad = score_pile(&pile(&["8H", "AS", "AH", "AC", "AD"])).total();
        // Four of a kind for 12; the total is 12 so no fifteen on top.
        assert_eq!(quad, 12);
    }

    #[test]
    fn test_pair_broken_by_intervening_card() {
        // The two 8s are not adjacent at the tail: no pair points.
        assert_eq!(score_pile(&pile(&["8C", "3H", "8D"])).total(), 0);
    }

    #[test]
    fn test_trailing_run_any_order() {
        // 4-2-3: the tail is a run of 3 regardless of play order.
        let breakdown = score_pile(&pile(&["4H", "2C", "3D"]));
        assert!(breakdown.items().iter().any(|i| matches!(i.reason, Reason::PegRun { length: 3 })));
    }

    #[test]
    fn test_longest_trailing_run_wins() {
        // 5-3-4-2-6 in some order: run of 5 for 5, not a run of 3.
        let p = pile(&["5H", "3C", "4D", "2S", "6H"]);
        let breakdown = score_pile(&p);
        let runs: Vec<_> = breakdown
            .items()
            .iter()
            .filter(|i| matches!(i.reason, Reason::PegRun { .. }))
            .collect();
        assert_eq!(runs.len(), 1);
        assert!(matches!(runs[0].reason, Reason::PegRun { length: 5 }));
    }

    #[test]
    fn test_run_must_include_newest_card() {
        // 2-3-4 then a king: the tail ending at the king is no run.
        assert_eq!(score_pile(&pile(&["2H", "3C", "4D", "KS"])).total(), 0);
    }

    #[test]
    fn test_duplicate_rank_blocks_run() {
        // 3-4-4-5: tail {4,5} + {3,4} sorted has a duplicate, not a run.
        assert_eq!(score_pile(&pile(&["3H", "4C", "4D", "5S"])).total(), 0);
    }

    #[test]
    fn test_fifteen_and_run_compose() {
        // 4-5-6 totals 15: run of 3 plus fifteen for 2.
        let breakdown = score_pile(&pile(&["4H", "5C", "6D"]));
        assert_eq!(breakdown.total(), 5);
    }

    #[test]
    fn test_score_pile_with_matches_append() {
        let p = pile(&["7H"]);
        let candidate: Card = "8C".parse().unwrap();
        let appended = pile(&["7H", "8C"]);
        assert_eq!(score_pile_with(&p, candidate), score_pile(&appended));
    }
}
