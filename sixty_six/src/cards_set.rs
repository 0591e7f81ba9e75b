use std::iter::FusedIterator;

use crate::{Card, Rank, Suit, DECK_SIZE};

/// A compact set of [`Card`]s, keyed by their identity index.
///
/// Hands are stored this way, so "is this card in the hand" is answered by
/// the engine's own set and never by anything a bot hands back.
///
/// ```
/// use sixty_six::{card, CardsSet};
/// let mut set = CardsSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `CardsSet`.
/// set = set.insert(card!("K♥"));
/// set = set.insert(card!("K♥"));  // Inserting a second time has no effect
/// set = set.insert(card!("9♣"));
/// assert_eq!(Vec::from_iter(set), vec![card!("9♣"), card!("K♥")]);
/// ```
///
/// # Note on immutability
///
/// The "mutating" methods return a new value instead of mutating in-place
/// (except for `std::ops::BitOrAssign`). The type is [`Copy`],
/// so a value is not consumed by methods with `self` receiver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CardsSet {
    // Only the low 24 bits are used.
    pub(crate) bits: u32,
}

const VALID_BITS: u32 = (1u32 << DECK_SIZE) - 1;

/// Every card of the deck.
pub const FULL_DECK_SET: CardsSet = CardsSet { bits: VALID_BITS };

impl CardsSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn contains(self, card: Card) -> bool {
        (self.bits & (1u32 << card.to_index())) != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, card: Card) -> Self {
        Self {
            bits: self.bits | (1u32 << card.to_index()),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, card: Card) -> Self {
        Self {
            bits: self.bits & !(1u32 << card.to_index()),
        }
    }

    /// The cards of the given suit.
    pub fn of_suit(self, suit: Suit) -> Self {
        Self {
            bits: self.bits & (0b111111u32 << (suit as u8 * 6)),
        }
    }

    /// Whether any card of `suit` ranks strictly above `rank`.
    pub fn has_higher(self, suit: Suit, rank: Rank) -> bool {
        self.of_suit(suit).into_iter().any(|card| card.rank > rank)
    }

    pub fn to_vec(self) -> Vec<Card> {
        self.into_iter().collect()
    }
}

impl std::ops::BitAnd for CardsSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl std::ops::BitOr for CardsSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl std::ops::BitOrAssign for CardsSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl std::ops::Not for CardsSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            bits: !self.bits & VALID_BITS,
        }
    }
}

impl FromIterator<Card> for CardsSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut bits = 0;
        for card in iter {
            bits |= 1u32 << card.to_index();
        }
        Self { bits }
    }
}

impl<'a> FromIterator<&'a Card> for CardsSet {
    fn from_iter<T: IntoIterator<Item = &'a Card>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl IntoIterator for CardsSet {
    type Item = Card;

    type IntoIter = CardsSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardsSetIter { bits: self.bits }
    }
}

/// Iterator for a [`CardsSet`] that returns cards suit by suit, by ascending rank.
#[derive(Clone, Copy, Debug)]
pub struct CardsSetIter {
    bits: u32,
}

impl Iterator for CardsSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // The number of trailing zeros is the card index
            let card_idx = self.bits.trailing_zeros() as u8;
            self.bits ^= 1u32 << card_idx;

            Some(Card::from_index(card_idx))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for CardsSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for CardsSetIter {}
