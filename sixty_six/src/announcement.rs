use tracing::debug;

use crate::{Card, CardsSet, Rank, RuleViolation, Stock};

/// Bonus for a marriage in the trump suit.
pub const ROYAL_MARRIAGE_POINTS: u32 = 40;
/// Bonus for any other marriage.
pub const MARRIAGE_POINTS: u32 = 20;

pub fn is_royal_marriage(trump: Card, spouse: Card) -> bool {
    spouse.suit == trump.suit
}

/// Checks that `spouse` is a Queen or King in `hand` and that its partner is there too.
pub fn validate_marriage(spouse: Card, hand: CardsSet) -> Result<(), RuleViolation> {
    if !hand.contains(spouse) {
        return Err(RuleViolation::NotInHand { card: spouse });
    }
    let partner_rank = match spouse.rank {
        Rank::Queen => Rank::King,
        Rank::King => Rank::Queen,
        _ => return Err(RuleViolation::NotASpouse { card: spouse }),
    };
    if !hand.contains(Card::new(spouse.suit, partner_rank)) {
        return Err(RuleViolation::MissingSpouse { card: spouse });
    }
    Ok(())
}

/// The points a marriage declared with `spouse` is worth.
pub fn marriage_bonus(spouse: Card, hand: CardsSet, trump: Card) -> Result<u32, RuleViolation> {
    validate_marriage(spouse, hand)?;
    let bonus = if is_royal_marriage(trump, spouse) {
        ROYAL_MARRIAGE_POINTS
    } else {
        MARRIAGE_POINTS
    };
    debug!(spouse = %spouse, bonus, "Marriage");
    Ok(bonus)
}

/// The nine of the trump suit.
pub fn nine_of_trumps(trump: Card) -> Card {
    Card::new(trump.suit, Rank::Nine)
}

/// Checks that the nine of trumps may be swapped for the face-up card.
///
/// `just_played` is the card the player has put on the table this turn, if
/// any: the nine that was just exchanged can't be used to declare again.
pub fn validate_nine_of_trumps(
    hand: CardsSet,
    trump: Card,
    stock: &Stock,
    just_played: Option<Card>,
) -> Result<(), RuleViolation> {
    let nine = nine_of_trumps(trump);
    if !hand.contains(nine) || just_played == Some(nine) {
        return Err(RuleViolation::MissingNineOfTrumps);
    }
    if stock.is_depleted() {
        return Err(RuleViolation::StockDepleted);
    }
    Ok(())
}

/// Performs the nine exchange: the nine goes under the stock in place of the
/// face-up card, which joins the hand. Returns the new hand.
///
/// Call [`validate_nine_of_trumps`] first.
pub fn exchange_nine_of_trumps(hand: CardsSet, trump: Card, stock: &mut Stock) -> CardsSet {
    let nine = nine_of_trumps(trump);
    match stock.swap_face_up(nine) {
        Some(face_up) => hand.remove(nine).insert(face_up),
        None => hand,
    }
}

/// Checks that the stock may still be closed.
///
/// Only the leader is ever asked, so leadership needs no separate check.
pub fn validate_closing(stock: &Stock) -> Result<(), RuleViolation> {
    if stock.is_depleted() {
        Err(RuleViolation::StockDepleted)
    } else {
        Ok(())
    }
}
