// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game session with rewards for agent driven play.
use landlord_cards::Card;
use log::debug;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    error::Rejection,
    game::Game,
    seat::Seat,
    view::GameView,
    wild::GameMode,
};

/// Rewards returned to the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    /// Reward for the move that empties the player hand.
    pub win: f32,
    /// Reward for playing cards the player doesn't hold.
    pub not_owned: f32,
    /// Reward for any other rejected action.
    pub rejected: f32,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            win: 100.0,
            not_owned: -10.0,
            rejected: -1.0,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The game variant.
    pub mode: GameMode,
    /// Seed for reproducible games, if not set the generator is seeded from
    /// the operating system.
    pub seed: Option<u64>,
    /// Rewards for each action outcome.
    pub rewards: Rewards,
}

/// The outcome code of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// The action has been accepted.
    Ok,
    /// See [Rejection::NotOwned].
    NotOwned,
    /// See [Rejection::IllegalCombination].
    IllegalCombination,
    /// See [Rejection::IllegalPass].
    IllegalPass,
    /// See [Rejection::DoesNotBeat].
    DoesNotBeat,
    /// The game was over and a new game has been dealt.
    NewGame,
}

impl ReasonCode {
    /// The reason code name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::Ok => "ok",
            ReasonCode::NotOwned => "not_owned",
            ReasonCode::IllegalCombination => "illegal_combination",
            ReasonCode::IllegalPass => "illegal_pass",
            ReasonCode::DoesNotBeat => "does_not_beat",
            ReasonCode::NewGame => "new_game",
        }
    }
}

impl From<Rejection> for ReasonCode {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::NotOwned => ReasonCode::NotOwned,
            Rejection::IllegalCombination => ReasonCode::IllegalCombination,
            Rejection::IllegalPass => ReasonCode::IllegalPass,
            Rejection::DoesNotBeat => ReasonCode::DoesNotBeat,
            Rejection::GameOver => ReasonCode::NewGame,
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Checks if the action has been accepted.
    pub accepted: bool,
    /// The outcome code.
    pub reason: ReasonCode,
    /// Human readable outcome message.
    pub message: String,
    /// The acting player reward.
    pub reward: f32,
    /// Checks if the game is over.
    pub done: bool,
    /// The winner seat, if the game is over.
    pub winner: Option<Seat>,
    /// The game view after the action.
    pub view: GameView,
}

/// A sequence of games sharing the same configuration and random generator.
#[derive(Debug)]
pub struct Session {
    config: Config,
    rng: StdRng,
    game: Game,
}

impl Session {
    /// Creates a session and deals the first game.
    pub fn new(config: Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let game = Game::new(config.mode, &mut rng);
        Self { config, rng, game }
    }

    /// Deals a new game and returns its view.
    pub fn reset(&mut self) -> GameView {
        self.game = Game::new(self.config.mode, &mut self.rng);
        self.game.view()
    }

    /// Plays the cards for the current player, an empty list is a pass.
    ///
    /// An action on a finished game deals a new game and is not applied.
    pub fn apply_action(&mut self, cards: &[Card]) -> Step {
        let seat = self.game.current_seat();
        match self.game.apply_action(cards) {
            Ok(accepted) => {
                debug!("Seat {seat} played {}", accepted.play);

                let reward = if accepted.winner.is_some() {
                    self.config.rewards.win
                } else {
                    0.0
                };

                self.step(true, ReasonCode::Ok, "ok".to_string(), reward)
            }
            Err(Rejection::GameOver) => {
                self.reset();
                self.step(false, ReasonCode::NewGame, "New game".to_string(), 0.0)
            }
            Err(rejection) => {
                debug!("Seat {seat} rejected {rejection}");

                let reward = match rejection {
                    Rejection::NotOwned => self.config.rewards.not_owned,
                    _ => self.config.rewards.rejected,
                };

                self.step(false, rejection.into(), rejection.to_string(), reward)
            }
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The current game view.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn step(&self, accepted: bool, reason: ReasonCode, message: String, reward: f32) -> Step {
        Step {
            accepted,
            reason,
            message,
            reward,
            done: self.game.is_over(),
            winner: self.game.winner(),
            view: self.game.view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cards, lowest_solo};

    fn seeded(mode: GameMode, seed: u64) -> Session {
        Session::new(Config {
            mode,
            seed: Some(seed),
            ..Config::default()
        })
    }

    /// Plays the session game to the end and returns the last step.
    fn play_out(session: &mut Session) -> Step {
        loop {
            let action = lowest_solo(session.game());
            let step = session.apply_action(&action);
            assert!(step.accepted);
            if step.done {
                return step;
            }
        }
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let mut s1 = seeded(GameMode::Wild, 42);
        let mut s2 = seeded(GameMode::Wild, 42);
        assert_eq!(s1.view(), s2.view());

        assert_eq!(s1.reset(), s2.reset());
        assert_eq!(play_out(&mut s1), play_out(&mut s2));
    }

    #[test]
    fn rejections_rewards() {
        let mut session = seeded(GameMode::Standard, 7);
        let seat = session.game().current_seat();

        let step = session.apply_action(&[]);
        assert!(!step.accepted);
        assert_eq!(step.reason, ReasonCode::IllegalPass);
        assert_eq!(step.message, "Cannot pass on free turn");
        assert_eq!(step.reward, -1.0);
        assert!(!step.done);
        assert_eq!(step.view.current, seat);

        // Five cards of the same rank are never in a hand.
        let step = session.apply_action(&cards("3 3 3 3 3"));
        assert_eq!(step.reason, ReasonCode::NotOwned);
        assert_eq!(step.message, "Target cards not in hand");
        assert_eq!(step.reward, -10.0);
        assert_eq!(session.game().current_seat(), seat);

        let step = session.apply_action(&lowest_solo(session.game()));
        assert!(step.accepted);
        assert_eq!(step.reason, ReasonCode::Ok);
        assert_eq!(step.reward, 0.0);
        assert_eq!(step.view.current, seat.next());
    }

    #[test]
    fn repeated_held_card_is_not_owned() {
        let mut session = seeded(GameMode::Standard, 7);
        let seat = session.game().current_seat();
        let held = session.game().hand(seat).cards()[0];

        for count in [256, 257] {
            let step = session.apply_action(&vec![held; count]);
            assert!(!step.accepted);
            assert_eq!(step.reason, ReasonCode::NotOwned);
            assert_eq!(step.reward, -10.0);
        }

        assert_eq!(session.game().hand(seat).len(), 20);
        assert!(session.game().history().is_empty());
        assert!(session.game().is_consistent());
    }

    #[test]
    fn win_and_new_game() {
        let mut session = seeded(GameMode::Wild, 3);

        let step = play_out(&mut session);
        assert_eq!(step.reward, 100.0);
        assert!(step.winner.is_some());
        assert_eq!(step.view.winner, step.winner);

        let step = session.apply_action(&[]);
        assert!(!step.accepted);
        assert_eq!(step.reason, ReasonCode::NewGame);
        assert_eq!(step.reward, 0.0);
        assert!(!step.done);
        assert!(step.winner.is_none());
        assert!(session.game().history().is_empty());
        assert!(session.game().is_consistent());
    }

    #[test]
    fn custom_rewards() {
        let mut session = Session::new(Config {
            seed: Some(9),
            rewards: Rewards {
                win: 1.0,
                not_owned: -0.5,
                rejected: -0.1,
            },
            ..Config::default()
        });

        assert_eq!(session.apply_action(&[]).reward, -0.1);
        assert_eq!(session.config().rewards.win, 1.0);
        assert_eq!(play_out(&mut session).reward, 1.0);
    }

    #[test]
    fn step_json() {
        let mut session = seeded(GameMode::Standard, 1);
        let step = session.apply_action(&[]);
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["accepted"], false);
        assert_eq!(json["reason"], "illegal_pass");
        assert_eq!(json["view"]["phase"], "free_play");
        assert!(json["winner"].is_null());
        assert_eq!(ReasonCode::DoesNotBeat.to_string(), "does_not_beat");
    }
}
