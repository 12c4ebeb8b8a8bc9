// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Landlord cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Card rank.
///
/// Ranks are declared in game order: the two beats the ace and the jokers
/// beat the two. The discriminant is the rank value used by the rules, from
/// 3 for the three up to 17 for the red joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Three
    Three = 3,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
    /// Two
    Two,
    /// Black joker
    BlackJoker,
    /// Red joker
    RedJoker,
}

impl Rank {
    /// The ranks with four copies in the deck, from three to two.
    pub const SUITED: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::SUITED
            .into_iter()
            .chain([Rank::BlackJoker, Rank::RedJoker])
    }

    /// The rank value.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Checks if this is one of the two jokers.
    pub fn is_joker(self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    /// Checks if this rank can be part of a sequence, twos and jokers cannot.
    pub fn is_sequenceable(self) -> bool {
        self < Rank::Two
    }

    /// The rank label.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::BlackJoker => "bj",
            Rank::RedJoker => "rj",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let rank = match label.to_ascii_lowercase().as_str() {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "t" => Rank::Ten,
            "j" => Rank::Jack,
            "q" => Rank::Queen,
            "k" => Rank::King,
            "a" => Rank::Ace,
            "2" => Rank::Two,
            "bj" => Rank::BlackJoker,
            "rj" => Rank::RedJoker,
            _ => return Err(ParseCardError(label.to_string())),
        };

        Ok(rank)
    }
}

/// Error returned when parsing an invalid card label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid card {0:?}")]
pub struct ParseCardError(String);

/// A Landlord card.
///
/// Only the rank matters to the rules, two cards with the same rank are
/// interchangeable. Cards serialize as their label, i.e. `"10"` or `"bj"`.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(Rank);

impl Card {
    /// Create a card given its rank.
    pub const fn new(rank: Rank) -> Card {
        Card(rank)
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.0
    }

    /// Returns the card rank value.
    pub fn value(&self) -> u8 {
        self.0.value()
    }
}

impl From<Rank> for Card {
    fn from(rank: Rank) -> Self {
        Card(rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Card)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 54;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals `count` cards from the top of the deck, or all the remaining cards
    /// if there are fewer than `count`.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    /// An unshuffled deck ordered by rank.
    fn default() -> Self {
        let cards = Rank::SUITED
            .into_iter()
            .flat_map(|r| [Card(r); 4])
            .chain([Card(Rank::BlackJoker), Card(Rank::RedJoker)])
            .collect();
        Self { cards }
    }
}

/// Number of cards for each rank in a set of cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankCounts([usize; 18]);

impl RankCounts {
    /// Counts the given cards.
    pub fn from_cards(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }

    /// Adds a card.
    pub fn add(&mut self, card: Card) {
        self.0[card.value() as usize] += 1;
    }

    /// The number of cards with the given rank.
    pub fn get(&self, rank: Rank) -> usize {
        self.0[rank.value() as usize]
    }

    /// The total number of cards.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// The number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }

    /// Checks if every card in `other` is in this set, with multiplicity.
    pub fn contains(&self, other: &RankCounts) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(s, o)| s >= o)
    }

    /// Returns the rank with most cards, ties go to the lowest rank.
    pub fn most_common(&self) -> Option<(Rank, usize)> {
        self.iter()
            .fold(None, |best, (rank, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((rank, count)),
            })
    }

    /// Iterates ranks with at least one card, in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, usize)> + '_ {
        Rank::ranks()
            .map(|r| (r, self.get(r)))
            .filter(|&(_, count)| count > 0)
    }
}

impl FromIterator<Card> for RankCounts {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut counts = Self::default();
        for card in iter {
            counts.add(card);
        }
        counts
    }
}
