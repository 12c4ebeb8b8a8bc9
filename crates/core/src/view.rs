// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Serializable game view for the acting player.
use landlord_cards::Card;
use serde::{Deserialize, Serialize};

use crate::{
    game::{Game, Phase},
    moves::CardType,
    seat::Seat,
    wild::WildRanks,
};

/// The role of a player in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The player that got the hole cards and plays alone.
    Landlord,
    /// One of the two players teamed against the landlord.
    Peasant,
}

/// A player as seen by the acting player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    /// The player seat.
    pub seat: Seat,
    /// The player role.
    pub role: Role,
    /// Number of cards left in the player hand.
    pub hand_count: usize,
    /// The player cards, only set for the acting player.
    pub hand: Option<Vec<Card>>,
    /// Checks if this player has to act.
    pub is_turn: bool,
}

/// The standing move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveView {
    /// The seat that played the move.
    pub seat: Seat,
    /// The played cards.
    pub cards: Vec<Card>,
    /// The move type.
    pub card_type: CardType,
}

/// A game view that hides the other players cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// The landlord seat.
    pub landlord: Seat,
    /// The cards dealt to the landlord after the deal.
    pub hole_cards: Vec<Card>,
    /// The wild ranks, empty in standard mode.
    pub wild_ranks: WildRanks,
    /// The players in seat order.
    pub players: Vec<PlayerView>,
    /// The standing move, if any.
    pub last_move: Option<MoveView>,
    /// The seat that has to act.
    pub current: Seat,
    /// The acting player phase.
    pub phase: Phase,
    /// The winner seat, if the game is over.
    pub winner: Option<Seat>,
}

impl GameView {
    /// Creates the view for the current player of a game.
    pub fn new(game: &Game) -> Self {
        let current = game.current_seat();
        let players = Seat::ALL
            .iter()
            .map(|&seat| {
                let hand = game.hand(seat);
                PlayerView {
                    seat,
                    role: if seat == game.landlord() {
                        Role::Landlord
                    } else {
                        Role::Peasant
                    },
                    hand_count: hand.len(),
                    hand: (seat == current).then(|| hand.cards().to_vec()),
                    is_turn: seat == current && !game.is_over(),
                }
            })
            .collect();

        let last_move = game.last_move().map(|last| MoveView {
            seat: last.seat,
            cards: last.play.cards().to_vec(),
            card_type: last.play.card_type(),
        });

        Self {
            landlord: game.landlord(),
            hole_cards: game.hole_cards().to_vec(),
            wild_ranks: game.wild_ranks(),
            players,
            last_move,
            current,
            phase: game.phase(),
            winner: game.winner(),
        }
    }

    /// The acting player view.
    pub fn current_player(&self) -> &PlayerView {
        &self.players[self.current.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wild::GameMode;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn hides_other_hands() {
        let mut game = Game::new(GameMode::Standard, &mut StdRng::seed_from_u64(11));
        let view = game.view();

        assert_eq!(view.players.len(), 3);
        assert_eq!(view.current, game.landlord());
        assert_eq!(view.phase, Phase::FreePlay);
        assert!(view.last_move.is_none());
        assert!(view.winner.is_none());

        for player in &view.players {
            if player.seat == view.current {
                assert!(player.is_turn);
                assert_eq!(player.role, Role::Landlord);
                assert_eq!(player.hand_count, 20);
                assert_eq!(player.hand.as_deref(), Some(game.hand(player.seat).cards()));
            } else {
                assert!(!player.is_turn);
                assert_eq!(player.role, Role::Peasant);
                assert_eq!(player.hand_count, 17);
                assert!(player.hand.is_none());
            }
        }

        let lead = vec![view.current_player().hand.as_ref().unwrap()[0]];
        game.apply_action(&lead).unwrap();

        let view = game.view();
        let last = view.last_move.as_ref().unwrap();
        assert_eq!(last.seat, game.landlord());
        assert_eq!(last.cards, lead);
        assert_eq!(last.card_type, CardType::Solo);
        assert_eq!(view.phase, Phase::Follow);
        assert_eq!(view.current_player().seat, game.landlord().next());
    }

    #[test]
    fn json_fields() {
        let game = Game::new(GameMode::Wild, &mut StdRng::seed_from_u64(5));
        let json = serde_json::to_value(game.view()).unwrap();

        for field in [
            "landlord",
            "holeCards",
            "wildRanks",
            "players",
            "lastMove",
            "current",
            "phase",
            "winner",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }

        assert_eq!(json["phase"], "free_play");
        assert_eq!(json["wildRanks"].as_array().unwrap().len(), 2);
        assert!(json["players"][0]["handCount"].as_u64().unwrap() >= 17);

        let view: GameView = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(view, game.view());

        // Views with out of range seats are rejected.
        let mut bad = json;
        bad["current"] = serde_json::json!(7);
        assert!(serde_json::from_value::<GameView>(bad).is_err());
    }
}
