use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A playing card of the 24-card Sixty-Six deck.
///
/// Every (suit, rank) pair exists exactly once in the deck, so a card's
/// [index](Card::to_index) doubles as its identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

/// The suit of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "♣")]
    Club,
    #[serde(rename = "♦")]
    Diamond,
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "♠")]
    Spade,
}

/// The rank of a [card](Card).
///
/// Ranks are declared in trick-taking order, which is also the order of
/// their [point values](Rank::value).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "A")]
    Ace,
}

pub const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

pub const RANKS: [Rank; 6] = [
    Rank::Nine,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ten,
    Rank::Ace,
];

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 24;

impl Rank {
    /// The points this rank is worth when it is part of a won trick.
    pub fn value(self) -> u32 {
        match self {
            Rank::Nine => 0,
            Rank::Jack => 2,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ten => 10,
            Rank::Ace => 11,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Nine => "9",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ten => "10",
            Rank::Ace => "A",
        }
    }
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The point value of this card.
    pub fn value(&self) -> u32 {
        self.rank.value()
    }

    /// Stable identity of this card, in `0..24`.
    pub fn to_index(&self) -> u8 {
        self.suit as u8 * 6 + self.rank as u8
    }

    /// Inverse of [`Card::to_index`]. Panics on an index outside `0..24`.
    pub fn from_index(idx: u8) -> Self {
        Self {
            suit: SUITS[usize::from(idx / 6)],
            rank: RANKS[usize::from(idx % 6)],
        }
    }

    pub fn is_trump(&self, trump: Card) -> bool {
        self.suit == trump.suit
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug)]
pub enum CardFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidRank,
    InvalidSuit,
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Both "T♥" and "10♥" name the ten of hearts
        let (rank, rest) = match s.strip_prefix("10") {
            Some(rest) => (Rank::Ten, rest),
            None => {
                let mut chars = s.chars();
                let rank = match chars.next().ok_or(CardFromStrErr::LessThanTwoChars)? {
                    '9' => Rank::Nine,
                    'J' => Rank::Jack,
                    'Q' => Rank::Queen,
                    'K' => Rank::King,
                    'T' => Rank::Ten,
                    'A' => Rank::Ace,
                    _ => return Err(CardFromStrErr::InvalidRank),
                };
                (rank, chars.as_str())
            }
        };
        let mut chars = rest.chars();
        let suit_char = chars.next().ok_or(CardFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(CardFromStrErr::MoreThanTwoChars);
        }
        let suit = match suit_char {
            '♣' => Suit::Club,
            '♦' => Suit::Diamond,
            '♥' => Suit::Heart,
            '♠' => Suit::Spade,
            _ => return Err(CardFromStrErr::InvalidSuit),
        };
        Ok(Card { rank, suit })
    }
}

/// Shorthand for creating cards from a two-character string.
///
/// The first character is the [rank](Rank) (note: 10 is `T`), the second is
/// the [suit](Suit) as a unicode character (♣, ♦, ♥, or ♠).
///
/// ```
/// # use sixty_six::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("T♥"),
///     Card { rank: Rank::Ten, suit: Suit::Heart }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
#[allow(unused_imports)]
pub(crate) use card;

/// All 24 cards, suit by suit, in ascending rank order.
pub fn deck() -> Vec<Card> {
    (0..DECK_SIZE as u8).map(Card::from_index).collect()
}

/// A freshly shuffled deck. The shuffle is a uniform Fisher–Yates over the
/// given random source, so a seeded RNG reproduces the same deal.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = deck();
    cards.shuffle(rng);
    cards
}
