// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use showdown_cards::{Board, Card, Deck, HoleCards, showdown_cards};
use showdown_eval::{HandValue, Showdown};

#[derive(Debug, Parser)]
#[command(about = "Texas Hold'em showdown hand evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates the best hand out of 5 to 7 cards.
    Eval {
        /// The hand cards, e.g. Ah Kd Ts 7c 2h.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Compares two hands at showdown.
    Compare {
        /// The first hand cards.
        #[clap(required = true)]
        cards: Vec<String>,
        /// The second hand cards.
        #[clap(long, required = true, num_args = 5..=7)]
        against: Vec<String>,
    },
    /// Deals a random hand to each player and shows the showdown result.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=9))]
        players: u8,
        /// Seed for the deck shuffle.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Eval { cards } => eval(&cards),
        Command::Compare { cards, against } => compare(&cards, &against),
        Command::Deal { players, seed } => deal(players as usize, seed),
    }
}

fn eval(specs: &[String]) -> Result<()> {
    let cards = parse_cards(specs)?;
    let value = HandValue::eval(&cards)?;

    println!("{value}");
    Ok(())
}

fn compare(first: &[String], second: &[String]) -> Result<()> {
    let first = HandValue::eval(&parse_cards(first)?)?;
    let second = HandValue::eval(&parse_cards(second)?)?;

    println!("First:  {first}");
    println!("Second: {second}");

    match first.showdown(&second) {
        Showdown::FirstWins => println!("First hand wins"),
        Showdown::SecondWins => println!("Second hand wins"),
        Showdown::Tie => println!("Tie"),
    }

    Ok(())
}

fn deal(players: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut deck = Deck::new_and_shuffled(&mut rng);
    info!("dealing to {players} players");

    let mut hands = Vec::with_capacity(players);
    for _ in 0..players {
        let mut hole = HoleCards::new();
        for _ in 0..HoleCards::MAX {
            let card = deck.deal().context("the deck is empty")?;
            hole.push(card)?;
        }
        hands.push(hole);
    }

    let mut board = Board::new();
    for _ in 0..Board::MAX {
        let card = deck.deal().context("the deck is empty")?;
        board.push(card)?;
    }

    println!("Board: {board}");

    let mut showdown = Vec::with_capacity(players);
    for (player, hole) in hands.iter().enumerate() {
        let value = HandValue::eval(&showdown_cards(hole, &board))?;
        println!("Player {}: {hole} {value}", player + 1);
        showdown.push(value);
    }

    // There may be more than one winner on a split pot.
    let best = showdown.iter().max().context("no hands dealt")?;
    let winners = showdown
        .iter()
        .enumerate()
        .filter(|(_, v)| *v == best)
        .map(|(player, _)| format!("Player {}", player + 1))
        .collect::<Vec<_>>();

    if winners.len() == 1 {
        println!("{} wins with {best}", winners[0]);
    } else {
        println!("Split pot between {} with {best}", winners.join(" and "));
    }

    Ok(())
}

fn parse_cards(specs: &[String]) -> Result<Vec<Card>> {
    specs
        .iter()
        .map(|s| {
            s.parse::<Card>()
                .with_context(|| format!("cannot parse card {s:?}"))
        })
        .collect()
}
