use crate::Card;

/// The undealt cards of a deal.
///
/// The front of the sequence is the top of the stock. After the trump reveal
/// the face-up card sits at the back, so it is the last card to be drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stock {
    cards: Vec<Card>,
}

impl Stock {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Two cards or less (the face-up card plus at most one more). Neither
    /// closing nor the nine exchange is possible any more.
    pub fn is_depleted(&self) -> bool {
        self.cards.len() <= 2
    }

    /// Takes `n` cards from the top.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Takes the top card.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Moves the top card to the bottom and returns it. Its suit is trump for the deal.
    pub fn reveal_trump(&mut self) -> Option<Card> {
        let trump = self.draw()?;
        self.cards.push(trump);
        Some(trump)
    }

    /// The face-up card at the bottom.
    pub fn face_up(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Replaces the face-up card with `card`, returning the old one.
    pub fn swap_face_up(&mut self, card: Card) -> Option<Card> {
        let previous = self.cards.pop()?;
        self.cards.push(card);
        Some(previous)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
