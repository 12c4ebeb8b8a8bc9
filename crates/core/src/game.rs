// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game state and turn state machine.
use landlord_cards::{Card, Deck, RankCounts};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    analyzer,
    deal::Deal,
    error::Rejection,
    hand::Hand,
    moves::Move,
    seat::Seat,
    view::GameView,
    wild::{GameMode, WildRanks},
};

/// The legality regime for the player about to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The player leads, any combination is legal but passing is not.
    FreePlay,
    /// The player must beat the standing move or pass.
    Follow,
}

/// The standing move and the seat that played it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastMove {
    /// The seat that played the move.
    pub seat: Seat,
    /// The move.
    pub play: Move,
}

/// A game history entry, an empty cards list is a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The seat that acted.
    pub seat: Seat,
    /// The played cards.
    pub cards: Vec<Card>,
}

/// An accepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The seat that acted.
    pub seat: Seat,
    /// The classified move.
    pub play: Move,
    /// The winner if this move ended the game.
    pub winner: Option<Seat>,
}

/// A Landlord game state.
///
/// The state is only mutated by [Game::apply_action], hands are never handed
/// out mutably.
#[derive(Debug, Clone)]
pub struct Game {
    hands: [Hand; Seat::COUNT],
    hole_cards: Vec<Card>,
    landlord: Seat,
    current: Seat,
    last_move: Option<LastMove>,
    history: Vec<Turn>,
    winner: Option<Seat>,
    wild: WildRanks,
}

impl Game {
    /// Deals a new game, the randomness for shuffling, picking the landlord and
    /// the wild ranks all comes from `rng`.
    pub fn new<R: Rng>(mode: GameMode, rng: &mut R) -> Self {
        let deal = Deal::new(rng);
        let wild = WildRanks::for_mode(mode, &deal.hole_cards, rng);

        info!(
            "New {mode} game landlord {} wild ranks {wild}",
            deal.landlord
        );

        Self::from_deal(deal, wild)
    }

    /// Creates a game from a deal, the landlord acts first.
    pub fn from_deal(deal: Deal, wild: WildRanks) -> Self {
        let Deal {
            hands,
            hole_cards,
            landlord,
        } = deal;

        Self {
            hands,
            hole_cards,
            landlord,
            current: landlord,
            last_move: None,
            history: Vec::default(),
            winner: None,
            wild,
        }
    }

    /// The phase for the player about to act.
    pub fn phase(&self) -> Phase {
        match &self.last_move {
            Some(last) if last.seat != self.current => Phase::Follow,
            _ => Phase::FreePlay,
        }
    }

    /// Plays the given cards for the current player, an empty list is a pass.
    ///
    /// On error the game is left unchanged and the same player must act again.
    pub fn apply_action(&mut self, cards: &[Card]) -> Result<Accepted, Rejection> {
        if self.winner.is_some() {
            return Err(Rejection::GameOver);
        }

        let seat = self.current;
        if !self.hands[seat.index()].contains(cards) {
            return Err(Rejection::NotOwned);
        }

        let play = analyzer::classify(cards, self.wild).ok_or(Rejection::IllegalCombination)?;

        match (self.phase(), &self.last_move) {
            (Phase::FreePlay, _) if play.is_pass() => return Err(Rejection::IllegalPass),
            (Phase::Follow, Some(last)) if !play.is_pass() && !play.can_beat(&last.play) => {
                return Err(Rejection::DoesNotBeat);
            }
            _ => {}
        }

        self.history.push(Turn {
            seat,
            cards: cards.to_vec(),
        });

        if !play.is_pass() {
            let hand = &mut self.hands[seat.index()];
            let removed = hand.remove(cards);
            debug_assert!(removed);

            if hand.is_empty() {
                self.winner = Some(seat);
                info!("Seat {seat} wins the game");
            }

            self.last_move = Some(LastMove {
                seat,
                play: play.clone(),
            });
        }

        if self.winner.is_none() {
            self.current = seat.next();
        }

        Ok(Accepted {
            seat,
            play,
            winner: self.winner,
        })
    }

    /// The landlord seat.
    pub fn landlord(&self) -> Seat {
        self.landlord
    }

    /// The seat that has to act.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// The hand for a seat.
    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    /// The hole cards dealt to the landlord.
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole_cards
    }

    /// The wild ranks for this game.
    pub fn wild_ranks(&self) -> WildRanks {
        self.wild
    }

    /// The standing move, if any.
    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    /// The accepted actions in play order.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The winner seat, if the game is over.
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// Checks if the game has a winner.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Checks that the hands and the played cards make a full deck.
    pub fn is_consistent(&self) -> bool {
        let held = self.hands.iter().flat_map(|h| h.cards().iter());
        let played = self.history.iter().flat_map(|t| t.cards.iter());
        let counts = held.chain(played).copied().collect::<RankCounts>();
        counts == RankCounts::from_cards(Deck::default().cards())
    }

    /// A view of this game for the current player.
    pub fn view(&self) -> GameView {
        GameView::new(self)
    }
}
