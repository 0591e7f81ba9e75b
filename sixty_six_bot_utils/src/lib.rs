mod card_counting;
pub use card_counting::*;

use sixty_six::{Card, CardsSet, Rank, Suit, FULL_DECK_SET, SUITS};

/// Whether `hand` holds both the Queen and the King of `suit`.
pub fn has_marriage(hand: &[Card], suit: Suit) -> bool {
    hand.contains(&Card::new(suit, Rank::Queen)) && hand.contains(&Card::new(suit, Rank::King))
}

/// A Queen from `hand` whose King is also in `hand`, preferring the trump suit.
pub fn find_marriage_spouse(hand: &[Card], trump: Card) -> Option<Card> {
    std::iter::once(trump.suit)
        .chain(SUITS.into_iter().filter(|&suit| suit != trump.suit))
        .find(|&suit| has_marriage(hand, suit))
        .map(|suit| Card::new(suit, Rank::Queen))
}

/// A reasonable reply to `opponent_card`: the highest card of the led suit,
/// else the lowest trump, else the first card. Always legal, even in a closed game.
pub fn suitable_card(hand: &[Card], trump: Card, opponent_card: Option<Card>) -> Option<Card> {
    if let Some(opponent_card) = opponent_card {
        let same_suit = hand
            .iter()
            .filter(|card| card.suit == opponent_card.suit)
            .max_by_key(|card| card.rank);
        if let Some(&card) = same_suit {
            return Some(card);
        }
        let lowest_trump = hand
            .iter()
            .filter(|card| card.is_trump(trump))
            .min_by_key(|card| card.rank);
        if let Some(&card) = lowest_trump {
            return Some(card);
        }
    }
    hand.first().copied()
}

/// Trumps that are neither in `hand` nor already `played`, so the opponent
/// may hold them.
pub fn outstanding_trumps(hand: &[Card], played: CardsSet, trump: Card) -> CardsSet {
    FULL_DECK_SET.of_suit(trump.suit) & !(played | CardsSet::from_iter(hand))
}
