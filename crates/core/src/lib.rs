// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Landlord game engine.
//!
//! Three players, one landlord against two peasants, race to empty their
//! hands. A [Game] deals the cards, validates each action against the move
//! [analyzer] and advances the turn, a [Session] wraps a game with a seeded
//! random generator and per action rewards:
//!
//! ```
//! # use landlord_core::{Config, GameMode, ReasonCode, Session};
//! let mut session = Session::new(Config {
//!     mode: GameMode::Wild,
//!     seed: Some(7),
//!     ..Config::default()
//! });
//!
//! // The landlord leads and cannot pass.
//! let step = session.apply_action(&[]);
//! assert_eq!(step.reason, ReasonCode::IllegalPass);
//!
//! let view = session.view();
//! let lead = view.current_player().hand.as_ref().unwrap()[0];
//! assert!(session.apply_action(&[lead]).accepted);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod analyzer;
pub mod deal;
pub mod error;
pub mod game;
pub mod hand;
pub mod moves;
pub mod seat;
pub mod session;
pub mod view;
pub mod wild;

pub use deal::Deal;
pub use error::Rejection;
pub use game::{Accepted, Game, LastMove, Phase, Turn};
pub use hand::Hand;
pub use landlord_cards::{Card, Deck, Rank};
pub use moves::{CardType, Move};
pub use seat::{InvalidSeat, Seat};
pub use session::{Config, ReasonCode, Rewards, Session, Step};
pub use view::{GameView, MoveView, PlayerView, Role};
pub use wild::{GameMode, WildRanks};

/// Parses space separated card labels.
#[cfg(test)]
pub(crate) fn cards(labels: &str) -> Vec<Card> {
    labels
        .split_whitespace()
        .map(|label| label.parse().unwrap())
        .collect()
}

/// Picks the lowest single card that is a legal action, or a pass.
#[cfg(test)]
pub(crate) fn lowest_solo(game: &Game) -> Vec<Card> {
    let hand = game.hand(game.current_seat()).cards();
    let last = match (game.phase(), game.last_move()) {
        (Phase::Follow, Some(last)) => &last.play,
        _ => return hand.last().map(|&c| vec![c]).unwrap_or_default(),
    };

    hand.iter()
        .rev()
        .map(|&c| vec![c])
        .find(|play| {
            Move::classify(play, game.wild_ranks()).is_some_and(|m| m.can_beat(last))
        })
        .unwrap_or_default()
}
