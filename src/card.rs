use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NUM_CARDS_DECK: u8 = 52;
pub const NUM_RANKS: u8 = 13;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    pub fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
        }
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(NUM_RANKS);

    pub fn new(value: u8) -> Option<Rank> {
        (Self::ACE.0..=Self::KING.0)
            .contains(&value)
            .then_some(Rank(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::ACE.0..=Self::KING.0).map(Rank)
    }

    pub fn is_adjacent(self, other: Rank) -> bool {
        self.0.abs_diff(other.0) == 1
    }

    fn label(self) -> &'static str {
        match self.0 {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} is outside 1..=13", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

/// A playing card. Suit and rank never change once built; the face-up flag
/// only changes through pile operations inside this crate.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub(crate) fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn turn_face_down(&mut self) {
        self.face_up = false;
    }

    /// `7♥`, `K♠`, or `##` for a face-down card.
    pub fn pretty_string(&self) -> String {
        if self.face_up {
            format!("{}{}", self.rank.label(), self.suit.symbol())
        } else {
            "##".to_string()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.pretty_string();
        if self.face_up && self.color() == Color::Red {
            write!(f, "{}", text.as_str().red())
        } else if self.face_up {
            write!(f, "{}", text)
        } else {
            write!(f, "{}", text.as_str().dimmed())
        }
    }
}

pub fn is_king(card: &Card) -> bool {
    card.rank == Rank::KING
}

pub fn is_ace(card: &Card) -> bool {
    card.rank == Rank::ACE
}

/// True when `top` is exactly one rank below `bottom`.
pub fn are_card_ranks_sequential(bottom: &Card, top: &Card) -> bool {
    bottom.rank > top.rank && bottom.rank.is_adjacent(top.rank)
}

pub fn are_card_colors_different(card1: &Card, card2: &Card) -> bool {
    card1.color() != card2.color()
}

pub fn are_card_suits_the_same(card1: &Card, card2: &Card) -> bool {
    card1.suit == card2.suit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank).unwrap())
    }

    #[test]
    fn rank_bounds() {
        assert_eq!(Rank::new(0), None);
        assert_eq!(Rank::new(14), None);
        assert_eq!(Rank::new(1), Some(Rank::ACE));
        assert_eq!(Rank::new(13), Some(Rank::KING));
        assert_eq!(Rank::all().count(), 13);
    }

    #[test]
    fn rank_adjacency_is_symmetric() {
        let seven = Rank::new(7).unwrap();
        let eight = Rank::new(8).unwrap();
        assert!(seven.is_adjacent(eight));
        assert!(eight.is_adjacent(seven));
        assert!(!seven.is_adjacent(seven));
        assert!(!Rank::ACE.is_adjacent(Rank::KING));
    }

    #[test]
    fn suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
    }

    #[test]
    fn sequential_ranks() {
        let red_eight = card(Suit::Hearts, 8);
        let black_seven = card(Suit::Spades, 7);
        assert!(are_card_ranks_sequential(&red_eight, &black_seven));
        assert!(!are_card_ranks_sequential(&black_seven, &red_eight));
        assert!(!are_card_ranks_sequential(&red_eight, &red_eight));
        assert!(!are_card_ranks_sequential(&red_eight, &card(Suit::Spades, 6)));
        assert!(!are_card_ranks_sequential(&card(Suit::Hearts, 1), &card(Suit::Spades, 13)));
        assert!(are_card_colors_different(&red_eight, &black_seven));
        assert!(!are_card_suits_the_same(&red_eight, &black_seven));
    }

    #[test]
    fn flip_up_is_idempotent() {
        let mut c = card(Suit::Clubs, 3);
        assert!(!c.is_face_up());
        c.flip_up();
        let once = c;
        c.flip_up();
        assert_eq!(c, once);
        assert!(c.is_face_up());
    }

    #[test]
    fn pretty_strings() {
        let mut c = card(Suit::Spades, 12);
        assert_eq!(c.pretty_string(), "##");
        c.flip_up();
        assert_eq!(c.pretty_string(), "Q♠");
    }

    #[test]
    fn rank_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rank>("14").is_err());
        assert_eq!(serde_json::from_str::<Rank>("1").unwrap(), Rank::ACE);
    }
}
