// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hole and community cards collections.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, CardError};

/// A player's private hole cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoleCards {
    cards: Vec<Card>,
}

impl HoleCards {
    /// The maximum number of hole cards.
    pub const MAX: usize = 2;

    /// Creates an empty hole cards collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card, fails if the player already holds two cards.
    pub fn push(&mut self, card: Card) -> Result<(), CardError> {
        if self.cards.len() == Self::MAX {
            return Err(CardError::HoleCardsFull(Self::MAX));
        }

        self.cards.push(card);
        Ok(())
    }

    /// The cards the player holds.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Number of cards the player holds.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the player holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// The community cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// The maximum number of community cards.
    pub const MAX: usize = 5;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card, fails if the board already has five cards.
    pub fn push(&mut self, card: Card) -> Result<(), CardError> {
        if self.cards.len() == Self::MAX {
            return Err(CardError::BoardFull(Self::MAX));
        }

        self.cards.push(card);
        Ok(())
    }

    /// The cards on the board.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// Combines a player's hole cards with the board into a showdown hand.
///
/// The evaluator expects the combined collection to hold 5 to 7 unique
/// cards, uniqueness is guaranteed when all cards come from one deck.
pub fn showdown_cards(hole: &HoleCards, board: &Board) -> Vec<Card> {
    hole.cards
        .iter()
        .chain(board.cards.iter())
        .copied()
        .collect()
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    write!(f, "[")?;
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{card}")?;
    }
    write!(f, "]")
}
