use crate::Card;

/// A broken rule. Returned by the legality and announcement checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleViolation {
    /// The card is not in the player's hand.
    NotInHand { card: Card },
    /// The game is closed and the player could have followed suit.
    MustFollowSuit { card: Card, opponent_card: Card },
    /// The game is closed and the player could have beaten the opponent's card in its suit.
    MustPlayHigherCard { card: Card, opponent_card: Card },
    /// The game is closed, the player can't follow suit, but holds a trump.
    MustPlayTrump { card: Card, opponent_card: Card },
    /// A marriage must be declared with a Queen or a King.
    NotASpouse { card: Card },
    /// The other half of the marriage is not in the hand.
    MissingSpouse { card: Card },
    /// The nine of trumps is not in the hand.
    MissingNineOfTrumps,
    /// The stock holds two cards or less.
    StockDepleted,
}

impl std::error::Error for RuleViolation {}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleViolation::NotInHand { card } => write!(f, "{} is not in hand", card),
            RuleViolation::MustFollowSuit { card, opponent_card } => write!(
                f,
                "must follow suit: played {} on {}, but the hand has cards of that suit",
                card, opponent_card
            ),
            RuleViolation::MustPlayHigherCard { card, opponent_card } => write!(
                f,
                "must play higher card: played {} on {}, but the hand has a higher one",
                card, opponent_card
            ),
            RuleViolation::MustPlayTrump { card, opponent_card } => write!(
                f,
                "must play trump card: played {} on {}, but the hand has a trump",
                card, opponent_card
            ),
            RuleViolation::NotASpouse { card } => {
                write!(f, "{} is neither a Queen nor a King", card)
            }
            RuleViolation::MissingSpouse { card } => {
                write!(f, "missing spouse card for {}", card)
            }
            RuleViolation::MissingNineOfTrumps => write!(f, "nine of trumps is not in hand"),
            RuleViolation::StockDepleted => write!(f, "stock depleted"),
        }
    }
}
