use crate::{Card, CardsSet};

/// What the judge knows about one player.
///
/// Only the judge mutates this. Bots see copies of the hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub hand: CardsSet,
    /// Trick points and marriage bonuses in the current deal.
    pub points: u32,
    /// Whether a trick was won in the current deal.
    pub has_won_trick: bool,
    /// Deal points won over the whole game.
    pub game_points: u32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything that only lives for one deal.
    pub fn reset_deal(&mut self) {
        self.hand = CardsSet::new();
        self.points = 0;
        self.has_won_trick = false;
    }

    pub fn take(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.hand = self.hand.insert(card);
        }
    }
}
