use crate::{Card, CardsSet, GameMode, RuleViolation};

/// Checks whether `card` may be played from `hand`.
///
/// In [`GameMode::Normal`] any card in the hand may be played. Once the game
/// is [closed](GameMode::Closed), the follower (the player who sees an
/// `opponent_card`) must follow suit, must beat the opponent's card within
/// the suit when possible, and must trump when unable to follow suit.
pub fn validate_play(
    card: Card,
    trump: Card,
    mode: GameMode,
    hand: CardsSet,
    opponent_card: Option<Card>,
) -> Result<(), RuleViolation> {
    if !hand.contains(card) {
        return Err(RuleViolation::NotInHand { card });
    }

    let Some(opponent_card) = opponent_card else {
        return Ok(());
    };
    if mode == GameMode::Normal {
        return Ok(());
    }

    let follows_suit = card.suit == opponent_card.suit;
    let can_follow_suit = !hand.of_suit(opponent_card.suit).is_empty();

    if !follows_suit && can_follow_suit {
        return Err(RuleViolation::MustFollowSuit {
            card,
            opponent_card,
        });
    }

    if follows_suit
        && opponent_card.rank > card.rank
        && hand.has_higher(opponent_card.suit, opponent_card.rank)
    {
        return Err(RuleViolation::MustPlayHigherCard {
            card,
            opponent_card,
        });
    }

    if !follows_suit && !card.is_trump(trump) && !hand.of_suit(trump.suit).is_empty() {
        return Err(RuleViolation::MustPlayTrump {
            card,
            opponent_card,
        });
    }

    Ok(())
}

/// The cards of `hand` that [`validate_play`] accepts.
pub fn legal_cards(
    trump: Card,
    mode: GameMode,
    hand: CardsSet,
    opponent_card: Option<Card>,
) -> CardsSet {
    hand.into_iter()
        .filter(|&card| validate_play(card, trump, mode, hand, opponent_card).is_ok())
        .collect()
}
