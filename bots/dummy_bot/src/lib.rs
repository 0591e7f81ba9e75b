use sixty_six::{nine_of_trumps, Bot, Card, GameMode, TrickContext, SUITS, WINNING_POINTS};
use sixty_six_bot_utils::{
    find_marriage_spouse, has_marriage, outstanding_trumps, suitable_card, CardCounter,
    CardCountingWrapper, HasCardCounter,
};

/// A simple deterministic strategy. Swaps the nine and melds whenever it can,
/// leads the marriage Queen, follows suit high once the game is closed, never
/// closes, and goes out as soon as its own count reaches 66.
///
/// Otherwise it leads its lowest plain card while the opponent may still hold
/// a trump, and its highest card once every other trump has been played.
pub struct DummyBot {
    name: String,
    counter: CardCounter,
}

impl DummyBot {
    pub fn new(name: &str) -> CardCountingWrapper<Self> {
        CardCountingWrapper::new(Self {
            name: String::from(name),
            counter: CardCounter::default(),
        })
    }
}

impl HasCardCounter for DummyBot {
    fn get_counter(&mut self) -> &mut CardCounter {
        &mut self.counter
    }
}

impl Bot for DummyBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn play_trick(&mut self, hand: Vec<Card>, context: TrickContext) -> Card {
        if context.opponent_card.is_none() {
            if let Some(spouse) = find_marriage_spouse(&hand, context.trump) {
                return spouse;
            }
            let lead = if outstanding_trumps(&hand, self.counter.played, context.trump).is_empty() {
                hand.iter().max_by_key(|card| card.rank)
            } else {
                hand.iter()
                    .filter(|card| !card.is_trump(context.trump))
                    .min_by_key(|card| card.rank)
            };
            if let Some(&card) = lead {
                return card;
            }
        }
        let card = match context.mode {
            GameMode::Normal => hand.first().copied(),
            GameMode::Closed => suitable_card(&hand, context.trump, context.opponent_card),
        };
        // An empty hand is never asked to play
        card.unwrap_or(context.trump)
    }

    fn announce_nine_of_trumps(&mut self, hand: Vec<Card>, context: TrickContext) -> bool {
        context.mode == GameMode::Normal
            && context.stock.len() > 2
            && hand.contains(&nine_of_trumps(context.trump))
    }

    fn announce_marriage(&mut self, hand: Vec<Card>, _context: TrickContext) -> bool {
        SUITS.into_iter().any(|suit| has_marriage(&hand, suit))
    }

    fn close_the_game(&mut self, _hand: Vec<Card>, _context: TrickContext) -> bool {
        false
    }

    fn go_out(&mut self) -> bool {
        self.counter.own_points >= WINNING_POINTS
    }
}
