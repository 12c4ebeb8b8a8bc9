// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard ranks.
//!
//! In wild mode two ranks are wild for the whole game: the *earth* rank is
//! the rank of the first hole card and the *heaven* rank is the one above
//! it. Every card of a wild rank is a wildcard.
use landlord_cards::{Card, Rank};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rules variant of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Classic rules without wildcards.
    #[default]
    Standard,
    /// Two ranks picked from the hole cards are wild.
    Wild,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Standard => write!(f, "standard"),
            GameMode::Wild => write!(f, "wild"),
        }
    }
}

/// The set of wild ranks for a game.
///
/// Each rank is a bit in the set indexed by the rank value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Card>", from = "Vec<Card>")]
pub struct WildRanks(u32);

impl WildRanks {
    /// No wild ranks.
    pub const NONE: WildRanks = WildRanks(0);

    /// Creates a set with the given ranks.
    pub fn new(ranks: impl IntoIterator<Item = Rank>) -> Self {
        Self(ranks.into_iter().fold(0, |bits, r| bits | 1 << r.value()))
    }

    /// Picks the wild ranks for a game in the given mode.
    pub fn for_mode<R: Rng>(mode: GameMode, hole_cards: &[Card], rng: &mut R) -> Self {
        match (mode, hole_cards.first()) {
            (GameMode::Wild, Some(&indicator)) => Self::designate(indicator, rng),
            _ => Self::NONE,
        }
    }

    /// Designates the earth and heaven ranks from an indicator card.
    ///
    /// A joker cannot be an indicator and is replaced by a rank drawn from
    /// three to two. The heaven rank of a two is the three.
    pub fn designate<R: Rng>(indicator: Card, rng: &mut R) -> Self {
        let earth = if indicator.rank().is_joker() {
            Rank::SUITED[rng.random_range(0..Rank::SUITED.len())]
        } else {
            indicator.rank()
        };

        Self::new([earth, heaven_rank(earth)])
    }

    /// Checks if a rank is wild.
    pub fn contains(&self, rank: Rank) -> bool {
        self.0 & (1 << rank.value()) != 0
    }

    /// Checks if a card is a wildcard.
    pub fn is_wild(&self, card: Card) -> bool {
        self.contains(card.rank())
    }

    /// The number of wild ranks.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if there are no wild ranks.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the wild ranks in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Rank> {
        Rank::ranks().filter(move |&r| self.contains(r))
    }
}

fn heaven_rank(earth: Rank) -> Rank {
    let pos = Rank::SUITED.iter().position(|&r| r == earth).unwrap_or(0);
    Rank::SUITED[(pos + 1) % Rank::SUITED.len()]
}

impl From<WildRanks> for Vec<Card> {
    fn from(wild: WildRanks) -> Self {
        wild.iter().map(Card::new).collect()
    }
}

impl From<Vec<Card>> for WildRanks {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards.into_iter().map(|c| c.rank()))
    }
}

impl fmt::Debug for WildRanks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for WildRanks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let labels = self.iter().map(|r| r.label()).collect::<Vec<_>>();
        write!(f, "{}", labels.join(" "))
    }
}
