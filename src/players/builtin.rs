//! Shipped computer players, from naive to exhaustive.

use crate::advisor::{recommend_discard, recommend_play};
use crate::cards::Card;
use crate::players::adapter::{DiscardContext, PlayChoice, PlayContext, PlayerAdapter};
use crate::scoring::{score_fifteens, score_pairs, score_pile_with, score_runs};

/// Discards its highest cards and pegs its lowest legal card. A useful
/// floor for tournaments and a predictable opponent in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlayer;

impl PlayerAdapter for GreedyPlayer {
    fn choose_discards(&mut self, ctx: &DiscardContext<'_>) -> (Card, Card) {
        let mut cards = ctx.dealt.to_vec();
        cards.sort();
        // Highest two; dealt hands always hold at least four cards.
        (cards[cards.len() - 2], cards[cards.len() - 1])
    }

    fn choose_play(&mut self, ctx: &PlayContext<'_>) -> PlayChoice {
        let lowest = ctx
            .legal
            .iter()
            .min()
            .copied()
            .expect("choose_play is only called with a legal play available");
        PlayChoice::Play(lowest)
    }
}

/// Static evaluation without starter enumeration: keeps the four cards
/// that score best on their own, net of what the discards would hand the
/// crib; pegs for maximum immediate points, lowest card on ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPlayer;

impl HeuristicPlayer {
    /// Rank-only value of four kept cards, no starter.
    fn kept_value(kept: &[Card]) -> i32 {
        i32::from(score_fifteens(kept) + score_pairs(kept) + score_runs(kept))
    }

    /// Rank-only value the discard pair would add to a crib.
    fn crib_value(pair: &[Card; 2]) -> i32 {
        i32::from(score_fifteens(pair) + score_pairs(pair))
    }
}

impl PlayerAdapter for HeuristicPlayer {
    fn choose_discards(&mut self, ctx: &DiscardContext<'_>) -> (Card, Card) {
        let dealt = ctx.dealt;
        let mut best: Option<((Card, Card), i32)> = None;
        for i in 0..dealt.len() {
            for j in (i + 1)..dealt.len() {
                let kept: Vec<Card> = dealt
                    .iter()
                    .enumerate()
                    .filter(|&(ix, _)| ix != i && ix != j)
                    .map(|(_, &c)| c)
                    .collect();
                let crib = Self::crib_value(&[dealt[i], dealt[j]]);
                let value = Self::kept_value(&kept)
                    + if ctx.my_crib { crib } else { -crib };
                if best.map_or(true, |(_, b)| value > b) {
                    best = Some(((dealt[i], dealt[j]), value));
                }
            }
        }
        best.expect("dealt hand holds at least two cards").0
    }

    fn choose_play(&mut self, ctx: &PlayContext<'_>) -> PlayChoice {
        let best = ctx
            .legal
            .iter()
            .copied()
            .max_by_key(|&c| (score_pile_with(ctx.pile, c).total(), std::cmp::Reverse(c)))
            .expect("choose_play is only called with a legal play available");
        PlayChoice::Play(best)
    }
}

/// Follows the exhaustive enumeration in `advisor` to the letter.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdvisorPlayer;

impl PlayerAdapter for AdvisorPlayer {
    fn choose_discards(&mut self, ctx: &DiscardContext<'_>) -> (Card, Card) {
        recommend_discard(ctx.dealt, ctx.my_crib)
            .first()
            .expect("dealt hand holds at least two cards")
            .discard
    }

    fn choose_play(&mut self, ctx: &PlayContext<'_>) -> PlayChoice {
        let recs = recommend_play(ctx.unplayed, ctx.pile, ctx.seen);
        // Legal plays exist whenever we are asked, so the ranking is
        // never empty.
        PlayChoice::Play(recs.first().expect("a legal play exists").card)
    }
}
