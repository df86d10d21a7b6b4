// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Hand evaluator for 5, 6, and 7 cards Texas Hold'em hands. The evaluator
//! classifies every 5 cards subset by rank counts and keeps the strongest,
//! a [HandValue] carries the hand category and the category tiebreak ranks
//! so that comparing two values decides a showdown:
//!
//! ```
//! # use showdown_eval::*;
//! let hand = |s: &str| -> Vec<Card> {
//!     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
//! };
//!
//! let hero = HandValue::eval(&hand("Ah Kh 8h 6h 3h 2c 2d")).unwrap();
//! let villain = HandValue::eval(&hand("Ts Jh Qd Kc As 2c 2d")).unwrap();
//!
//! assert_eq!(hero.rank(), HandRank::Flush);
//! assert_eq!(hero.showdown(&villain), Showdown::FirstWins);
//! assert_eq!(villain.describe(), "Straight, Ace high");
//! ```
//!
//! Evaluation is a pure function of its input, there is no shared state and
//! values can be computed concurrently from any thread.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue, Showdown};

mod describe;

// Reexport cards types.
pub use showdown_cards::{Board, Card, CardError, Deck, HoleCards, Rank, Suit, showdown_cards};
