// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hand type.
use landlord_cards::{Card, RankCounts};

/// The cards held by a player, sorted from the highest to the lowest rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand with the given cards.
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort_unstable_by(|a, b| b.cmp(a));
        Self { cards }
    }

    /// The hand cards in descending order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the hand is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks if the hand holds all the given cards, with multiplicity.
    pub fn contains(&self, cards: &[Card]) -> bool {
        cards.len() <= self.cards.len()
            && RankCounts::from_cards(&self.cards).contains(&RankCounts::from_cards(cards))
    }

    /// Adds cards to this hand.
    pub fn add(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
        self.cards.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Removes the given cards.
    ///
    /// Returns false and leaves the hand untouched if the hand doesn't hold all
    /// the cards.
    pub fn remove(&mut self, cards: &[Card]) -> bool {
        if !self.contains(cards) {
            return false;
        }

        for card in cards {
            if let Some(pos) = self.cards.iter().position(|c| c == card) {
                self.cards.remove(pos);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards;

    #[test]
    fn sorted_descending() {
        let mut hand = Hand::new(cards("3 rj 10 2 A"));
        assert_eq!(hand.cards(), cards("rj 2 A 10 3"));

        hand.add(&cards("K bj 3"));
        assert_eq!(hand.cards(), cards("rj bj 2 A K 10 3 3"));
        assert_eq!(hand.len(), 8);
    }

    #[test]
    fn remove_cards() {
        let mut hand = Hand::new(cards("A A K 5 3"));
        assert!(hand.contains(&cards("A A")));
        assert!(!hand.contains(&cards("K K")));

        assert!(!hand.remove(&cards("A A A")));
        assert_eq!(hand.len(), 5);

        assert!(hand.remove(&cards("A K A")));
        assert_eq!(hand.cards(), cards("5 3"));

        assert!(hand.remove(&cards("3 5")));
        assert!(hand.is_empty());
    }

    #[test]
    fn oversized_plays_are_not_held() {
        let mut hand = Hand::new(cards("A K 5"));
        for count in [255, 256, 257] {
            let play = vec![Card::new(landlord_cards::Rank::Ace); count];
            assert!(!hand.contains(&play));
            assert!(!hand.remove(&play));
        }
        assert_eq!(hand.cards(), cards("A K 5"));
    }
}
