// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand descriptions for showing a hand at showdown.
//!
//! Rendering only consumes the category and tiebreak ranks of a
//! [HandValue], it never re-derives any ranking rule.
use std::fmt;

use showdown_cards::Rank;

use crate::eval::{HandRank, HandValue};

impl HandRank {
    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl HandValue {
    /// Renders this hand as text, e.g. `Full House, Kings over Fives`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.tiebreaks();
        match self.rank() {
            HandRank::RoyalFlush => write!(f, "Royal Flush"),
            HandRank::StraightFlush => write!(f, "Straight Flush, {} high", t[0].name()),
            HandRank::FourOfAKind => {
                write!(f, "Four of a Kind, {}, {} kicker", plural(t[0]), t[1].name())
            }
            HandRank::FullHouse => {
                write!(f, "Full House, {} over {}", plural(t[0]), plural(t[1]))
            }
            HandRank::Flush => {
                write!(f, "Flush, ")?;
                write_names(f, t)
            }
            HandRank::Straight => write!(f, "Straight, {} high", t[0].name()),
            HandRank::ThreeOfAKind => {
                write!(f, "Three of a Kind, {}, ", plural(t[0]))?;
                write_names(f, &t[1..])?;
                write!(f, " kickers")
            }
            HandRank::TwoPair => {
                write!(
                    f,
                    "Two Pair, {} and {}, {} kicker",
                    plural(t[0]),
                    plural(t[1]),
                    t[2].name()
                )
            }
            HandRank::Pair => {
                write!(f, "Pair of {}, ", plural(t[0]))?;
                write_names(f, &t[1..])?;
                write!(f, " kickers")
            }
            HandRank::HighCard => {
                write!(f, "High Card, ")?;
                write_names(f, t)
            }
        }
    }
}

/// The plural rank name used for paired ranks.
fn plural(rank: Rank) -> &'static str {
    match rank {
        Rank::Deuce => "Twos",
        Rank::Trey => "Threes",
        Rank::Four => "Fours",
        Rank::Five => "Fives",
        Rank::Six => "Sixes",
        Rank::Seven => "Sevens",
        Rank::Eight => "Eights",
        Rank::Nine => "Nines",
        Rank::Ten => "Tens",
        Rank::Jack => "Jacks",
        Rank::Queen => "Queens",
        Rank::King => "Kings",
        Rank::Ace => "Aces",
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, ranks: &[Rank]) -> fmt::Result {
    for (i, rank) in ranks.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", rank.name())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::Card;

    fn describe(s: &str) -> String {
        let cards: Vec<Card> = s
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect();
        HandValue::eval(&cards).unwrap().describe()
    }

    #[test]
    fn describe_hands() {
        assert_eq!(describe("As Ks Qs Js Ts"), "Royal Flush");
        assert_eq!(describe("As 2s 3s 4s 5s"), "Straight Flush, Five high");
        assert_eq!(
            describe("Ah Ad Ac As 2h"),
            "Four of a Kind, Aces, Two kicker"
        );
        assert_eq!(describe("Kh Kd Ks 5c 5h"), "Full House, Kings over Fives");
        assert_eq!(describe("Ah Kh 8h 6h 3h"), "Flush, Ace King Eight Six Three");
        assert_eq!(describe("As 2h 3d 4c 5s"), "Straight, Five high");
        assert_eq!(
            describe("As Ah Ad Kc Qs"),
            "Three of a Kind, Aces, King Queen kickers"
        );
        assert_eq!(
            describe("Js Jh 9d 9c As"),
            "Two Pair, Jacks and Nines, Ace kicker"
        );
        assert_eq!(
            describe("4s 4h Ad Kc Qs"),
            "Pair of Fours, Ace King Queen kickers"
        );
        assert_eq!(
            describe("As Kh Qd Jc 9s"),
            "High Card, Ace King Queen Jack Nine"
        );
    }

    #[test]
    fn describe_best_of_seven() {
        assert_eq!(
            describe("Th Qd 9d 4c Ks Ad 4s"),
            "Pair of Fours, Ace King Queen kickers"
        );
    }

    #[test]
    fn rank_names() {
        assert_eq!(HandRank::HighCard.to_string(), "High Card");
        assert_eq!(HandRank::RoyalFlush.to_string(), "Royal Flush");
        assert_eq!(HandRank::FullHouse.name(), "Full House");
    }
}
