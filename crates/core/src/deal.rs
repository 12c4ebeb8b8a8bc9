// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck distribution.
use landlord_cards::{Card, Deck};
use rand::Rng;

use crate::{hand::Hand, seat::Seat};

/// The cards dealt at the start of a game.
#[derive(Debug, Clone)]
pub struct Deal {
    /// The players hands, the landlord hand includes the hole cards.
    pub hands: [Hand; Seat::COUNT],
    /// The hole cards awarded to the landlord.
    pub hole_cards: Vec<Card>,
    /// The landlord seat.
    pub landlord: Seat,
}

impl Deal {
    /// The number of cards dealt to each player.
    pub const HAND_SIZE: usize = 17;
    /// The number of hole cards.
    pub const HOLE_CARDS: usize = 3;

    /// Shuffles a new deck and deals it.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let deck = Deck::new_and_shuffled(rng);
        Self::from_deck(deck, rng)
    }

    /// Deals 17 cards to each player and 3 hole cards, picks the landlord at
    /// random and gives it the hole cards.
    ///
    /// Panics if the deck doesn't have exactly [Deck::SIZE] cards.
    pub fn from_deck<R: Rng>(mut deck: Deck, rng: &mut R) -> Self {
        assert_eq!(deck.len(), Deck::SIZE, "Invalid deck size");

        let mut hands: [Hand; Seat::COUNT] =
            std::array::from_fn(|_| Hand::new(deck.deal(Self::HAND_SIZE)));
        let hole_cards = deck.deal(Self::HOLE_CARDS);

        let landlord = Seat::new(rng.random_range(0..Seat::COUNT));
        hands[landlord.index()].add(&hole_cards);

        Self {
            hands,
            hole_cards,
            landlord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landlord_cards::RankCounts;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn deal_is_complete() {
        let full_deck = RankCounts::from_cards(Deck::default().cards());

        for seed in 0..200 {
            let deal = Deal::new(&mut StdRng::seed_from_u64(seed));
            assert_eq!(deal.hole_cards.len(), Deal::HOLE_CARDS);

            let counts = deal
                .hands
                .iter()
                .flat_map(|h| h.cards().iter().copied())
                .collect::<RankCounts>();
            assert_eq!(counts, full_deck, "seed {seed}");

            for seat in Seat::ALL {
                let hand = &deal.hands[seat.index()];
                if seat == deal.landlord {
                    assert_eq!(hand.len(), Deal::HAND_SIZE + Deal::HOLE_CARDS);
                    assert!(hand.contains(&deal.hole_cards));
                } else {
                    assert_eq!(hand.len(), Deal::HAND_SIZE);
                }

                assert!(hand.cards().windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }

    #[test]
    fn landlord_is_random() {
        let mut landlords = [0; Seat::COUNT];
        for seed in 0..60 {
            let deal = Deal::new(&mut StdRng::seed_from_u64(seed));
            landlords[deal.landlord.index()] += 1;
        }

        assert!(landlords.iter().all(|&count| count > 0));
    }

    #[test]
    fn deal_is_reproducible() {
        let d1 = Deal::new(&mut StdRng::seed_from_u64(5));
        let d2 = Deal::new(&mut StdRng::seed_from_u64(5));
        assert_eq!(d1.hands, d2.hands);
        assert_eq!(d1.hole_cards, d2.hole_cards);
        assert_eq!(d1.landlord, d2.landlord);
    }

    #[test]
    #[should_panic(expected = "Invalid deck size")]
    fn short_deck() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        deck.deal(1);
        Deal::from_deck(deck, &mut rng);
    }
}
