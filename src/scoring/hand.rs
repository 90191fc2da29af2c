//! Hand and crib scoring.
//!
//! Pure functions over an immutable set of cards plus the starter. The
//! sub-rules compose: fifteens, pairs, runs, flush, nobs. Scoring never
//! fails — any input fully covered by the combinatorial rules yields a
//! defined (possibly zero) score.
//!
//! The only rule difference between a hand and the crib is the flush: a
//! hand scores 4 for four matching suits (5 with the starter), the crib
//! scores only the all-or-nothing 5.

use crate::cards::{Card, Rank};
use crate::scoring::breakdown::{Breakdown, Reason};

/// Number of distinct non-empty subsets whose values sum to fifteen.
#[must_use]
pub fn count_fifteens(cards: &[Card]) -> u8 {
    debug_assert!(cards.len() <= 7);
    let mut count = 0u8;
    // Cards sets are at most 7 (a 3-player crib + starter); enumerating
    // all subsets is at most 127 sums.
    for mask in 1u32..(1 << cards.len()) {
        let sum: u32 = cards
            .iter()
            .enumerate()
            .filter(|(ix, _)| mask & (1 << ix) != 0)
            .map(|(_, c)| u32::from(c.value()))
            .sum();
        if sum == 15 {
            count += 1;
        }
    }
    count
}

/// Points from fifteens: 2 per qualifying subset. Subsets of different
/// sizes over the same cards count separately.
#[must_use]
pub fn score_fifteens(cards: &[Card]) -> u8 {
    2 * count_fifteens(cards)
}

/// Per-rank card counts indexed by run order (index 0 unused).
fn rank_counts(cards: &[Card]) -> [u8; 14] {
    let mut counts = [0u8; 14];
    for card in cards {
        counts[card.run_order() as usize] += 1;
    }
    counts
}

/// Points from pairs: 2 per same-rank pairing, so a triple is 6 and a
/// quadruple 12.
#[must_use]
pub fn score_pairs(cards: &[Card]) -> u8 {
    pair_groups(cards).iter().map(|&(_, count)| pair_points(count)).sum()
}

fn pair_points(count: u8) -> u8 {
    // 2 * C(count, 2)
    count * (count - 1)
}

/// Ranks holding 2+ cards, with their counts, in rank order.
fn pair_groups(cards: &[Card]) -> Vec<(Rank, u8)> {
    let counts = rank_counts(cards);
    Rank::ALL
        .iter()
        .filter_map(|&rank| {
            let count = counts[rank.run_order() as usize];
            (count >= 2).then_some((rank, count))
        })
        .collect()
}

/// Maximal runs of length >= 3: `(length, multiplicity)` per run, where
/// multiplicity is the product of the rank counts inside the run (the
/// "double run" / "triple run" rule). Maximality means a 4-run is never
/// also counted as two overlapping 3-runs.
fn run_groups(cards: &[Card]) -> Vec<(u8, u8)> {
    let counts = rank_counts(cards);
    let mut runs = Vec::new();
    let mut order = 1usize;
    while order <= 13 {
        if counts[order] == 0 {
            order += 1;
            continue;
        }
        let start = order;
        let mut multiplicity = 1u8;
        while order <= 13 && counts[order] > 0 {
            multiplicity *= counts[order];
            order += 1;
        }
        let length = (order - start) as u8;
        if length >= 3 {
            runs.push((length, multiplicity));
        }
    }
    runs
}

/// Points from runs: length × multiplicity per maximal run.
#[must_use]
pub fn score_runs(cards: &[Card]) -> u8 {
    run_groups(cards).iter().map(|&(len, mult)| len * mult).sum()
}

/// Flush points. A hand flush needs all `hand` cards suited (4 points, 5
/// if the starter matches); a crib flush must include the starter or
/// scores nothing.
#[must_use]
pub fn score_flush(hand: &[Card], starter: Card, is_crib: bool) -> u8 {
    let Some(first) = hand.first() else { return 0 };
    if !hand.iter().all(|c| c.suit() == first.suit()) {
        return 0;
    }
    let with_starter = starter.suit() == first.suit();
    match (is_crib, with_starter) {
        (true, false) => 0,
        (_, true) => hand.len() as u8 + 1,
        (false, false) => hand.len() as u8,
    }
}

/// One point for holding the jack of the starter's suit.
#[must_use]
pub fn score_nobs(hand: &[Card], starter: Card) -> u8 {
    u8::from(hand.iter().any(|c| c.is_jack() && c.suit() == starter.suit()))
}

fn score_cards(hand: &[Card], starter: Card, is_crib: bool) -> Breakdown {
    let mut all: Vec<Card> = hand.to_vec();
    all.push(starter);

    let mut breakdown = Breakdown::new();

    let fifteens = count_fifteens(&all);
    if fifteens > 0 {
        breakdown.push(Reason::Fifteens { count: fifteens }, 2 * fifteens);
    }
    for (rank, count) in pair_groups(&all) {
        breakdown.push(Reason::Pairs { rank, count }, pair_points(count));
    }
    for (length, multiplicity) in run_groups(&all) {
        breakdown.push(Reason::Run { length, multiplicity }, length * multiplicity);
    }
    let flush = score_flush(hand, starter, is_crib);
    if flush > 0 {
        breakdown.push(Reason::Flush { cards: flush }, flush);
    }
    if score_nobs(hand, starter) > 0 {
        breakdown.push(Reason::Nobs, 1);
    }
    breakdown
}

/// Score a 4-card hand against the starter.
#[must_use]
pub fn score_hand(hand: &[Card], starter: Card) -> Breakdown {
    score_cards(hand, starter, false)
}

/// Score the crib against the starter (crib flush rule applies).
#[must_use]
pub fn score_crib(crib: &[Card], starter: Card) -> Breakdown {
    score_cards(crib, starter, true)
}
