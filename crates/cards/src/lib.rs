// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Landlord cards types.
//!
//! Landlord is played with a 54 cards deck: four copies of each rank from
//! three up to the two, plus a black and a red joker. Suits play no role in
//! the rules so a [Card] is identified by its [Rank] only:
//!
//! ```
//! # use landlord_cards::{Card, Rank};
//! let ace = Card::new(Rank::Ace);
//! let two: Card = "2".parse().unwrap();
//! assert!(two > ace);
//! ```
//!
//! A [Deck] creates the full set of cards, shuffled with a caller provided
//! random generator so that deals are reproducible from a seed:
//!
//! ```
//! # use landlord_cards::Deck;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//! let hand = deck.deal(17);
//! assert_eq!(hand.len(), 17);
//! assert_eq!(deck.len(), Deck::SIZE - 17);
//! ```
//!
//! [RankCounts] counts cards by rank, it is used to check that a set of cards
//! is contained in another one and to find the shape of a combination.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, RankCounts};
