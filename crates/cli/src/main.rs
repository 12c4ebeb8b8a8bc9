// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Landlord hot-seat terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, ValueEnum};

use landlord_core::{Config, GameMode, Session};

pub mod terminal;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Standard rules.
    Standard,
    /// Two wild ranks picked from the first hole card.
    Wild,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Standard => GameMode::Standard,
            Mode::Wild => GameMode::Wild,
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// The game variant.
    #[clap(long, short, value_enum, default_value_t = Mode::Standard)]
    mode: Mode,
    /// Seed for reproducible games.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print each step as a JSON line.
    #[clap(long)]
    json: bool,
    /// Log accepted and rejected actions.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        mode: cli.mode.into(),
        seed: cli.seed,
        ..Config::default()
    };

    terminal::run(Session::new(config), cli.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_flag() {
        let cli = Cli::parse_from(["landlord", "--mode", "wild", "--seed", "4"]);
        assert_eq!(GameMode::from(cli.mode), GameMode::Wild);
        assert_eq!(cli.seed, Some(4));

        let cli = Cli::parse_from(["landlord"]);
        assert_eq!(GameMode::from(cli.mode), GameMode::Standard);
        assert!(!cli.json);
    }
}
