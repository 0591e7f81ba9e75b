use crate::Card;

/// The outcome of one trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrickOutcome {
    pub winning_card: Card,
    pub losing_card: Card,
    /// The combined value of both cards, credited to the winner.
    pub points: u32,
}

impl TrickOutcome {
    pub fn leader_wins(&self, first_card: Card) -> bool {
        self.winning_card == first_card
    }
}

/// Determines which of the two cards takes the trick.
///
/// A lone trump wins. Otherwise a card of a different suit than the led one
/// can't win, and two cards of the same suit compare by rank.
pub fn resolve_trick(first_card: Card, second_card: Card, trump: Card) -> TrickOutcome {
    let points = first_card.value() + second_card.value();
    let first_wins = match (first_card.is_trump(trump), second_card.is_trump(trump)) {
        (true, false) => true,
        (false, true) => false,
        _ if first_card.suit != second_card.suit => true,
        _ => first_card.rank > second_card.rank,
    };
    let (winning_card, losing_card) = if first_wins {
        (first_card, second_card)
    } else {
        (second_card, first_card)
    };
    TrickOutcome {
        winning_card,
        losing_card,
        points,
    }
}
