// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Move analyzer.
//!
//! Classifies a set of played cards into a [Move] with a [CardType] and a
//! comparison rank. Plays without wildcards are matched against the fixed
//! shapes of the game (solo, pair, trio, trio with kicker, sequences, planes
//! and bombs). When wildcards are present they can complete pairs, trios and
//! bombs only, wildcards are not used to fill kickers or sequence gaps.
use landlord_cards::{Card, Rank, RankCounts};

use crate::{
    moves::{CardType, Move},
    wild::WildRanks,
};

/// Classifies the played cards using the given wild ranks.
///
/// Returns `None` if the cards don't form a legal combination, an empty play
/// is a pass.
pub fn classify(cards: &[Card], wild: WildRanks) -> Option<Move> {
    if cards.is_empty() {
        return Some(Move::pass());
    }

    // Wildcards never make a rocket.
    if is_rocket(cards) {
        return Some(Move::new(cards, CardType::Rocket, Move::TOP_RANK));
    }

    let wild_count = cards.iter().filter(|&&c| wild.is_wild(c)).count();
    if cards.len() == 4 && wild_count == 4 {
        return Some(Move::new(cards, CardType::PureWildBomb, Move::TOP_RANK));
    }

    let found = if wild_count == 0 {
        classify_standard(cards)
    } else {
        classify_wild(cards, wild, wild_count)
    };

    found.map(|(card_type, rank)| Move::new(cards, card_type, rank.value()))
}

fn is_rocket(cards: &[Card]) -> bool {
    let mut ranks = cards.iter().map(|c| c.rank()).collect::<Vec<_>>();
    ranks.sort_unstable();
    ranks == [Rank::BlackJoker, Rank::RedJoker]
}

/// Classifies a play without wildcards.
fn classify_standard(cards: &[Card]) -> Option<(CardType, Rank)> {
    let counts = RankCounts::from_cards(cards);

    // Ranks sorted by count with the larger groups first.
    let mut groups = counts.iter().collect::<Vec<_>>();
    groups.sort_by(|(r1, c1), (r2, c2)| c2.cmp(c1).then(r1.cmp(r2)));
    let shape = groups.iter().map(|&(_, count)| count).collect::<Vec<_>>();
    let top = groups.first()?.0;

    match shape.as_slice() {
        [4] => return Some((CardType::Bomb, top)),
        [1] => return Some((CardType::Solo, top)),
        [2] => return Some((CardType::Pair, top)),
        [3] => return Some((CardType::Trio, top)),
        [3, 1] => return Some((CardType::TrioSolo, top)),
        [3, 2] => return Some((CardType::TrioPair, top)),
        _ => {}
    }

    if let Some(low) = uniform_run(&counts, 1, 5) {
        return Some((CardType::SeqSolo, low));
    }

    if let Some(low) = uniform_run(&counts, 2, 3) {
        return Some((CardType::SeqPair, low));
    }

    if let Some(low) = uniform_run(&counts, 3, 2) {
        return Some((CardType::SeqTrio, low));
    }

    plane(&counts)
}

/// Classifies a play with at least one wildcard.
fn classify_wild(cards: &[Card], wild: WildRanks, wild_count: usize) -> Option<(CardType, Rank)> {
    let normal = cards
        .iter()
        .copied()
        .filter(|&c| !wild.is_wild(c))
        .collect::<RankCounts>();
    let max_wild = cards
        .iter()
        .filter(|&&c| wild.is_wild(c))
        .map(|c| c.rank())
        .max()?;

    match cards.len() {
        // A lone wildcard is played at its own rank.
        1 => Some((CardType::Solo, max_wild)),
        // Two wildcards alone are a pair of the highest wild rank.
        2 => match normal.most_common() {
            Some((rank, _)) => Some((CardType::Pair, rank)),
            None => Some((CardType::Pair, max_wild)),
        },
        3 => match normal.most_common() {
            Some((rank, _)) if normal.distinct() == 1 => Some((CardType::Trio, rank)),
            Some(_) => None,
            None => Some((CardType::Trio, max_wild)),
        },
        // Wildcards complete the most frequent rank to four of a kind.
        4 => normal
            .most_common()
            .filter(|&(_, count)| count + wild_count >= 4)
            .map(|(rank, _)| (CardType::SoftBomb, rank)),
        _ => None,
    }
}

/// Checks if the ranks are consecutive and none of them is a two or a joker.
fn is_consecutive(ranks: &[Rank]) -> bool {
    ranks.iter().all(|r| r.is_sequenceable())
        && ranks.windows(2).all(|w| w[1].value() == w[0].value() + 1)
}

/// Returns the lowest rank of a run where each rank has exactly `width` cards
/// and the run has at least `min_len` ranks.
fn uniform_run(counts: &RankCounts, width: usize, min_len: usize) -> Option<Rank> {
    let ranks = counts
        .iter()
        .map(|(rank, count)| (count == width).then_some(rank))
        .collect::<Option<Vec<_>>>()?;

    (ranks.len() >= min_len && is_consecutive(&ranks)).then(|| ranks[0])
}

/// Matches trios runs with kickers.
fn plane(counts: &RankCounts) -> Option<(CardType, Rank)> {
    let total = counts.total();

    if total % 4 == 0 {
        if let Some(low) = plane_run(counts, total / 4, |_| true) {
            return Some((CardType::PlaneSolo, low));
        }
    }

    if total % 5 == 0 {
        if let Some(low) = plane_run(counts, total / 5, |count| count % 2 == 0) {
            return Some((CardType::PlanePair, low));
        }
    }

    None
}

/// Finds the highest run of `len` consecutive trios such that every other rank
/// count satisfies `kicker`, returns the lowest rank of the run.
fn plane_run(counts: &RankCounts, len: usize, kicker: impl Fn(usize) -> bool) -> Option<Rank> {
    if len < 2 {
        return None;
    }

    let trios = counts
        .iter()
        .filter(|&(rank, count)| count == 3 && rank.is_sequenceable())
        .map(|(rank, _)| rank)
        .collect::<Vec<_>>();

    trios
        .windows(len)
        .rev()
        .find(|run| {
            is_consecutive(run)
                && counts
                    .iter()
                    .filter(|(rank, _)| !run.contains(rank))
                    .all(|(_, count)| kicker(count))
        })
        .map(|run| run[0])
}
