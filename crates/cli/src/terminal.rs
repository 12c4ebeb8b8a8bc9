// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Context, Result};
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io::{self, BufRead, Write};

use landlord_core::{Card, GameView, Role, Session, Step};

/// A command read from the terminal.
#[derive(Debug, PartialEq)]
enum Command {
    /// Play the cards, no cards is a pass.
    Play(Vec<Card>),
    /// Deal a new game.
    NewGame,
    /// Exit the game.
    Quit,
}

/// Runs the terminal loop until the input ends or the user quits.
pub fn run(mut session: Session, json: bool) -> Result<()> {
    let mut stdout = io::stdout();

    if json {
        writeln!(stdout, "{}", serde_json::to_string(&session.view())?)?;
    } else {
        print_help(&mut stdout)?;
        print_view(&mut stdout, &session.view())?;
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;

        let cards = match parse_command(&line) {
            Ok(Command::Play(cards)) => cards,
            Ok(Command::NewGame) => {
                let view = session.reset();
                if json {
                    writeln!(stdout, "{}", serde_json::to_string(&view)?)?;
                } else {
                    print_view(&mut stdout, &view)?;
                }
                continue;
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        let step = session.apply_action(&cards);
        if json {
            writeln!(stdout, "{}", serde_json::to_string(&step)?)?;
        } else {
            print_step(&mut stdout, &step)?;
        }
    }

    Ok(())
}

/// Parses a terminal line, cards can be separated by spaces or commas.
fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "new" => return Ok(Command::NewGame),
        "" | "-" | "pass" => return Ok(Command::Play(Vec::default())),
        _ => {}
    }

    let cards = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|label| !label.is_empty())
        .map(|label| label.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Command::Play(cards))
}

fn print_help(w: &mut impl Write) -> Result<()> {
    writeln!(w, "Enter cards as 3..10 J Q K A 2 bj rj, 'pass' or '-' to pass.")?;
    writeln!(w, "Enter 'new' for a new game, 'q' to quit.")?;
    Ok(())
}

fn print_step(w: &mut impl Write, step: &Step) -> Result<()> {
    if step.accepted {
        queue!(w, style::PrintStyledContent("ok".dark_green()))?;
    } else {
        let text = format!("{} ({})", step.message, step.reason);
        queue!(w, style::PrintStyledContent(text.as_str().dark_red()))?;
    }

    if step.reward != 0.0 {
        write!(w, " reward {}", step.reward)?;
    }
    writeln!(w)?;

    if let Some(winner) = step.winner {
        let text = format!("Seat {winner} wins, enter 'new' for a new game");
        queue!(w, style::PrintStyledContent(text.as_str().yellow()))?;
        writeln!(w)?;
    }

    print_view(w, &step.view)
}

fn print_view(w: &mut impl Write, view: &GameView) -> Result<()> {
    let hole = join(&view.hole_cards);
    writeln!(w, "Hole cards: {hole}  Wild ranks: {}", view.wild_ranks)?;

    for p in &view.players {
        let role = match p.role {
            Role::Landlord => "landlord",
            Role::Peasant => "peasant",
        };

        let marker = if p.is_turn { ">" } else { " " };
        let text = format!("{marker} seat {} {role:<8} {:>2} cards", p.seat, p.hand_count);
        if p.is_turn {
            queue!(w, style::PrintStyledContent(text.as_str().bold()))?;
        } else {
            write!(w, "{text}")?;
        }

        if let Some(hand) = &p.hand {
            write!(w, "  {}", join(hand))?;
        }
        writeln!(w)?;
    }

    if let Some(last) = &view.last_move {
        writeln!(
            w,
            "Last move: seat {} {} {}",
            last.seat,
            last.card_type,
            join(&last.cards)
        )?;
    }

    if view.winner.is_none() {
        writeln!(w, "Seat {} to act ({:?})", view.current, view.phase)?;
    }

    w.flush()?;
    Ok(())
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use landlord_core::{Config, Rank};

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert_eq!(parse_command(" QUIT ").unwrap(), Command::Quit);
        assert_eq!(parse_command("new").unwrap(), Command::NewGame);
        assert_eq!(parse_command("").unwrap(), Command::Play(vec![]));
        assert_eq!(parse_command("pass").unwrap(), Command::Play(vec![]));
        assert_eq!(parse_command("-").unwrap(), Command::Play(vec![]));

        let cmd = parse_command("10, j  q,K,a").unwrap();
        let expected = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
            .map(Card::new)
            .to_vec();
        assert_eq!(cmd, Command::Play(expected));

        assert!(parse_command("3 4 X").is_err());
    }

    #[test]
    fn prints_view_and_step() {
        let mut session = Session::new(Config {
            seed: Some(3),
            ..Config::default()
        });

        let mut out = Vec::new();
        print_view(&mut out, &session.view()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("landlord"));
        assert!(text.contains("Wild ranks: none"));

        let wild = Session::new(Config {
            mode: landlord_core::GameMode::Wild,
            seed: Some(3),
            ..Config::default()
        });
        let mut out = Vec::new();
        print_view(&mut out, &wild.view()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("Wild ranks: {}", wild.view().wild_ranks)));
        assert!(!text.contains("Wild ranks: none"));

        let mut out = Vec::new();
        print_step(&mut out, &session.apply_action(&[])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Cannot pass on free turn"));
        assert!(text.contains("illegal_pass"));
    }
}
