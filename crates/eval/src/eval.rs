// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator for 5, 6, and 7 cards hands.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use showdown_cards::{Card, Rank};

/// Errors raised by hand evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A showdown hand must have between 5 and 7 cards.
    #[error("a showdown hand must have 5 to 7 cards, got {0}")]
    InvalidHandSize(usize),
}

/// The category of an evaluated hand, from weakest to strongest.
///
/// Each category carries its ordinal so that categories compare by hand
/// strength, any flush beats any straight regardless of the cards ranks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRank {
    /// No pair, ranked by its five cards.
    HighCard = 1,
    /// A single pair and three kickers.
    Pair = 2,
    /// Two pairs and one kicker.
    TwoPair = 3,
    /// Three cards of the same rank and two kickers.
    ThreeOfAKind = 4,
    /// Five consecutive ranks of mixed suits.
    Straight = 5,
    /// Five cards of the same suit.
    Flush = 6,
    /// Three cards of one rank and a pair of another.
    FullHouse = 7,
    /// Four cards of the same rank and one kicker.
    FourOfAKind = 8,
    /// Five consecutive ranks of the same suit.
    StraightFlush = 9,
    /// The ace high straight flush.
    RoyalFlush = 10,
}

/// An evaluated hand value.
///
/// A value is the hand category and the category tiebreak ranks in
/// decreasing significance, the paired or straight high ranks first
/// followed by the kickers in descending order. Values order by category
/// first and then lexicographically by tiebreaks, so comparing two values
/// decides a showdown.
///
/// ```
/// # use showdown_eval::{HandRank, HandValue};
/// # use showdown_cards::Card;
/// let cards: Vec<Card> = ["Kh", "Kd", "Ks", "5c", "5h"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let hv = HandValue::eval(&cards).unwrap();
/// assert_eq!(hv.rank(), HandRank::FullHouse);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreaks: [Rank; 5],
    len: u8,
}

impl HandValue {
    /// Evaluates the best 5 cards hand out of a 5 to 7 cards hand.
    ///
    /// Fails with [EvalError::InvalidHandSize] for hands outside that
    /// range. Duplicate cards are undefined input, a deal can never
    /// produce them and this method does not check for them.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        let n = cards.len();
        if !(5..=7).contains(&n) {
            return Err(EvalError::InvalidHandSize(n));
        }

        // Enumerate the 1, 6, or 21 five cards subsets with fixed index
        // loops and keep the maximum value.
        let mut hand = [cards[0]; 5];
        let mut best: Option<HandValue> = None;

        for c1 in 0..n {
            hand[0] = cards[c1];

            for c2 in (c1 + 1)..n {
                hand[1] = cards[c2];

                for c3 in (c2 + 1)..n {
                    hand[2] = cards[c3];

                    for c4 in (c3 + 1)..n {
                        hand[3] = cards[c4];

                        for c5 in (c4 + 1)..n {
                            hand[4] = cards[c5];

                            let value = Self::eval_five(&hand);
                            if best.is_none_or(|b| value > b) {
                                best = Some(value);
                            }
                        }
                    }
                }
            }
        }

        Ok(best.expect("a 5 cards hand has at least one subset"))
    }

    /// Evaluates a 5 cards hand.
    pub fn eval_five(cards: &[Card; 5]) -> HandValue {
        let mut counts = [0u8; 13];
        for card in cards {
            counts[card.rank() as usize] += 1;
        }

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = straight_high(&counts);

        if let Some(high) = straight {
            if is_flush {
                let rank = if high == Rank::Ace {
                    HandRank::RoyalFlush
                } else {
                    HandRank::StraightFlush
                };
                return HandValue::new(rank, &[high]);
            }
        }

        if is_flush {
            let mut ranks = cards.map(|c| c.rank());
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            return HandValue::new(HandRank::Flush, &ranks);
        }

        if let Some(high) = straight {
            return HandValue::new(HandRank::Straight, &[high]);
        }

        // Group the ranks by their count, larger groups first and higher
        // ranks first within groups of the same size, the group ranks are
        // the tiebreaks for every paired category.
        let mut groups = [(0u8, Rank::Deuce); 5];
        let mut ngroups = 0;

        for rank in Rank::ranks() {
            let count = counts[rank as usize];
            if count > 0 {
                groups[ngroups] = (count, rank);
                ngroups += 1;
            }
        }

        let groups = &mut groups[..ngroups];
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let rank = match (groups[0].0, groups.get(1).map(|g| g.0)) {
            (4, _) => HandRank::FourOfAKind,
            (3, Some(2)) => HandRank::FullHouse,
            (3, _) => HandRank::ThreeOfAKind,
            (2, Some(2)) => HandRank::TwoPair,
            (2, _) => HandRank::Pair,
            _ => HandRank::HighCard,
        };

        let mut tiebreaks = [Rank::Deuce; 5];
        for (t, (_, rank)) in tiebreaks.iter_mut().zip(groups.iter()) {
            *t = *rank;
        }

        HandValue::new(rank, &tiebreaks[..ngroups])
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tiebreak ranks in decreasing significance.
    pub fn tiebreaks(&self) -> &[Rank] {
        &self.tiebreaks[..self.len as usize]
    }

    /// Compares two evaluated hands at showdown.
    pub fn showdown(&self, other: &HandValue) -> Showdown {
        match self.cmp(other) {
            Ordering::Greater => Showdown::FirstWins,
            Ordering::Less => Showdown::SecondWins,
            Ordering::Equal => Showdown::Tie,
        }
    }

    fn new(rank: HandRank, ranks: &[Rank]) -> HandValue {
        debug_assert!(!ranks.is_empty() && ranks.len() <= 5);

        let mut tiebreaks = [Rank::Deuce; 5];
        tiebreaks[..ranks.len()].copy_from_slice(ranks);

        HandValue {
            rank,
            tiebreaks,
            len: ranks.len() as u8,
        }
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tiebreaks().cmp(other.tiebreaks()))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The result of comparing two hands at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Showdown {
    /// The first hand wins.
    FirstWins,
    /// The second hand wins.
    SecondWins,
    /// The hands have equal strength.
    Tie,
}

/// Returns the high rank of a straight for 5 cards rank counts.
///
/// A straight requires five distinct ranks spanning exactly four
/// positions, with the wheel A-2-3-4-5 the ace plays low and the straight
/// is five high.
fn straight_high(counts: &[u8; 13]) -> Option<Rank> {
    if counts.iter().any(|&c| c > 1) {
        return None;
    }

    let lo = counts.iter().position(|&c| c == 1)?;
    let hi = counts.iter().rposition(|&c| c == 1)?;
    if hi - lo == 4 {
        return Rank::ranks().nth(hi);
    }

    // The wheel.
    if counts[Rank::Ace as usize] == 1 && counts[..4].iter().all(|&c| c == 1) {
        return Some(Rank::Five);
    }

    None
}
