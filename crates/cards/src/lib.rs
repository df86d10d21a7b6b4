// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah > kd);
//! ```
//!
//! cards can also be parsed from their two character textual form, a rank
//! character followed by a suit letter or symbol:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = "Ah".parse::<Card>().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//!
//! let ks = "K♠".parse::<Card>().unwrap();
//! assert_eq!(ks, Card::new(Rank::King, Suit::Spades));
//! ```
//!
//! a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.deal().unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
//!
//! and the [HoleCards] and [Board] collections that combine into the 5 to 7
//! cards hand evaluated at showdown:
//!
//! ```
//! # use showdown_cards::{showdown_cards, Board, Deck, HoleCards};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//!
//! let mut hole = HoleCards::new();
//! hole.push(deck.deal().unwrap()).unwrap();
//! hole.push(deck.deal().unwrap()).unwrap();
//!
//! let mut board = Board::new();
//! for _ in 0..Board::MAX {
//!     board.push(deck.deal().unwrap()).unwrap();
//! }
//!
//! assert_eq!(showdown_cards(&hole, &board).len(), 7);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, Rank, Suit};

mod hand;
pub use hand::{Board, HoleCards, showdown_cards};
