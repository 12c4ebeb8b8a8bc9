// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Action rejection reasons.
use thiserror::Error;

/// The reason a player action has been rejected.
///
/// A rejected action leaves the game unchanged, the same player has to act
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The player doesn't hold all the played cards.
    #[error("Target cards not in hand")]
    NotOwned,
    /// The cards are not a legal combination.
    #[error("Invalid card combination")]
    IllegalCombination,
    /// The player leads and cannot pass.
    #[error("Cannot pass on free turn")]
    IllegalPass,
    /// The move doesn't beat the standing move.
    #[error("Move does not beat previous move")]
    DoesNotBeat,
    /// The game has a winner, a new game must be started.
    #[error("Game is over")]
    GameOver,
}
