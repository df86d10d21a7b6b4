// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Errors raised by cards construction and collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank character is not one of `2-9,T,J,Q,K,A`.
    #[error("invalid card rank {0:?}")]
    InvalidRank(char),
    /// The suit character is not a suit letter or symbol.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(char),
    /// The card text is not a rank character followed by a suit character.
    #[error("malformed card {0:?}, expected a rank and a suit character")]
    Malformed(String),
    /// A player can hold at most two hole cards.
    #[error("hole cards can hold at most {0} cards")]
    HoleCardsFull(usize),
    /// The board can hold at most five community cards.
    #[error("the board can hold at most {0} cards")]
    BoardFull(usize),
}

/// A Poker card.
///
/// A card is an immutable rank and suit pair. Cards are ordered by rank
/// value as suits break no ties in Texas Hold'em, the suit only arbitrates
/// between equal ranks so that the order is total and consistent with
/// equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the numeric rank value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card from a rank character `2-9,T,J,Q,K,A` followed by a
    /// suit letter `s,h,d,c` or suit symbol, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::Malformed(s.to_string()));
        };

        Ok(Card::new(Rank::from_char(rank)?, Suit::from_char(suit)?))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the numeric rank value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns the rank full name.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Two",
            Rank::Trey => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    fn from_char(c: char) -> Result<Rank, CardError> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardError::InvalidRank(c)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Returns the suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Returns the suit full name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    fn from_char(c: char) -> Result<Suit, CardError> {
        let suit = match c {
            'c' | 'C' | '♣' => Suit::Clubs,
            'd' | 'D' | '♦' => Suit::Diamonds,
            'h' | 'H' | '♥' => Suit::Hearts,
            's' | 'S' | '♠' => Suit::Spades,
            _ => return Err(CardError::InvalidSuit(c)),
        };

        Ok(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_values() {
        for (rank, value) in Rank::ranks().zip(2u8..=14) {
            assert_eq!(rank.value(), value);
            assert_eq!(Card::new(rank, Suit::Spades).value(), value);
        }
    }

    #[test]
    fn card_ordering() {
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let kh = Card::new(Rank::King, Suit::Hearts);
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let tc = Card::new(Rank::Ten, Suit::Clubs);

        assert!(ah > kd);
        assert!(kd > tc);
        assert_ne!(kd, kh);
        assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));

        // Same rank cards compare equal on rank.
        assert_eq!(kd.rank(), kh.rank());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "Ah");
    }

    #[test]
    fn card_from_str() {
        let c = "As".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ace, Suit::Spades));

        // Case insensitive rank and suit.
        let c = "tD".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Diamonds));

        // Suit symbols.
        let c = "K♥".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::King, Suit::Hearts));

        let c = "2♣".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Deuce, Suit::Clubs));
    }

    #[test]
    fn card_from_str_errors() {
        assert_eq!(
            "1s".parse::<Card>(),
            Err(CardError::InvalidRank('1'))
        );
        assert_eq!(
            "Ax".parse::<Card>(),
            Err(CardError::InvalidSuit('x'))
        );
        assert_eq!(
            "".parse::<Card>(),
            Err(CardError::Malformed(String::new()))
        );
        assert_eq!(
            "A".parse::<Card>(),
            Err(CardError::Malformed("A".to_string()))
        );
        assert_eq!(
            "Asd".parse::<Card>(),
            Err(CardError::Malformed("Asd".to_string()))
        );
    }

    #[test]
    fn card_round_trip() {
        let mut deck = Deck::default();
        while let Some(card) = deck.deal() {
            let parsed = card.to_string().parse::<Card>().unwrap();
            assert_eq!(parsed.rank(), card.rank());
            assert_eq!(parsed.suit(), card.suit());
        }
    }

    #[test]
    fn deck_deal() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), Deck::SIZE - 2);

        let cards = deck.into_iter().collect::<Vec<_>>();
        assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
        assert!(!cards.contains(&Card::new(Rank::King, Suit::Diamonds)));
    }
}
