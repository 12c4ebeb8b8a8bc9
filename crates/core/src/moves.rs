// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Move types and comparison.
use landlord_cards::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{analyzer, wild::WildRanks};

/// The category of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// The player declines to play.
    Pass,
    /// A single card.
    Solo,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same rank.
    Trio,
    /// A trio with a single card kicker.
    TrioSolo,
    /// A trio with a pair kicker.
    TrioPair,
    /// Five or more consecutive single cards.
    SeqSolo,
    /// Three or more consecutive pairs.
    SeqPair,
    /// Two or more consecutive trios.
    SeqTrio,
    /// Consecutive trios with one single card kicker per trio.
    PlaneSolo,
    /// Consecutive trios with one pair kicker per trio.
    PlanePair,
    /// Four cards of the same rank.
    Bomb,
    /// Four of a kind completed with one to three wildcards.
    SoftBomb,
    /// Four wildcards.
    PureWildBomb,
    /// The two jokers.
    Rocket,
}

impl CardType {
    /// The bomb strength of this type, zero if the type is not a bomb.
    ///
    /// A soft bomb is beaten by a bomb and a bomb by four wildcards, the rocket
    /// is compared separately.
    pub fn bomb_strength(&self) -> u8 {
        match self {
            CardType::SoftBomb => 1,
            CardType::Bomb => 2,
            CardType::PureWildBomb => 3,
            CardType::Pass
            | CardType::Solo
            | CardType::Pair
            | CardType::Trio
            | CardType::TrioSolo
            | CardType::TrioPair
            | CardType::SeqSolo
            | CardType::SeqPair
            | CardType::SeqTrio
            | CardType::PlaneSolo
            | CardType::PlanePair
            | CardType::Rocket => 0,
        }
    }

    /// The type label.
    pub fn label(&self) -> &'static str {
        match self {
            CardType::Pass => "pass",
            CardType::Solo => "solo",
            CardType::Pair => "pair",
            CardType::Trio => "trio",
            CardType::TrioSolo => "trio+solo",
            CardType::TrioPair => "trio+pair",
            CardType::SeqSolo => "sequence",
            CardType::SeqPair => "pairs sequence",
            CardType::SeqTrio => "trios sequence",
            CardType::PlaneSolo => "plane+solos",
            CardType::PlanePair => "plane+pairs",
            CardType::Bomb => "bomb",
            CardType::SoftBomb => "soft bomb",
            CardType::PureWildBomb => "wild bomb",
            CardType::Rocket => "rocket",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A classified play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    cards: Vec<Card>,
    card_type: CardType,
    rank: u8,
}

impl Move {
    /// The comparison rank of the rocket and of pure wildcard bombs.
    pub const TOP_RANK: u8 = 100;

    pub(crate) fn new(cards: &[Card], card_type: CardType, rank: u8) -> Self {
        Self {
            cards: cards.to_vec(),
            card_type,
            rank,
        }
    }

    /// The pass move.
    pub fn pass() -> Self {
        Self::new(&[], CardType::Pass, 0)
    }

    /// Classifies the given cards, returns `None` if they are not a legal
    /// combination. See [analyzer::classify].
    pub fn classify(cards: &[Card], wild: WildRanks) -> Option<Move> {
        analyzer::classify(cards, wild)
    }

    /// The played cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The move category.
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// The rank used to compare moves with the same type and length.
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// The number of played cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if this is a pass.
    pub fn is_pass(&self) -> bool {
        self.card_type == CardType::Pass
    }

    /// Checks if this move beats the previous move.
    pub fn can_beat(&self, prev: &Move) -> bool {
        match (self.card_type, prev.card_type) {
            (CardType::Pass, _) => false,
            (_, CardType::Rocket) => false,
            (CardType::Rocket, _) => true,
            (cur, last) => match (cur.bomb_strength(), last.bomb_strength()) {
                (0, 0) => cur == last && self.len() == prev.len() && self.rank > prev.rank,
                (0, _) => false,
                (_, 0) => true,
                (s1, s2) if s1 != s2 => s1 > s2,
                _ => self.rank > prev.rank,
            },
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.card_type)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}
