use std::collections::VecDeque;

use sixty_six::{legal_cards, Bot, Card, CardsSet, GameMode, TrickCompletedResult, TrickContext};

/// A bot for tests: plays a fixed script of cards, then the first legal card,
/// and records everything it was shown.
#[derive(Default)]
pub struct ScriptedBot {
    pub name: String,
    pub script: VecDeque<Card>,
    pub nine_of_trumps: bool,
    pub marriage: bool,
    pub close: bool,
    pub going_out: bool,
    /// Go out when asked again after having played a card in the same trick.
    pub going_out_after_declaring: bool,
    /// Scribble over the copies it receives.
    pub tamper: bool,

    pub play_requests: usize,
    pub declaration_requests: usize,
    pub hands: Vec<Vec<Card>>,
    pub contexts: Vec<TrickContext>,
    pub tricks: Vec<TrickCompletedResult>,
    pub finished: Vec<Option<String>>,
    played_this_trick: bool,
}

impl ScriptedBot {
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            ..Default::default()
        }
    }

    pub fn plays(mut self, cards: &[Card]) -> Self {
        self.script = cards.iter().copied().collect();
        self
    }
}

impl Bot for ScriptedBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn play_trick(&mut self, mut hand: Vec<Card>, mut context: TrickContext) -> Card {
        self.play_requests += 1;
        self.played_this_trick = true;
        self.hands.push(hand.clone());
        self.contexts.push(context.clone());
        let card = self.script.pop_front().unwrap_or_else(|| {
            legal_cards(
                context.trump,
                context.mode,
                CardsSet::from_iter(&hand),
                context.opponent_card,
            )
            .into_iter()
            .next()
            .unwrap()
        });
        if self.tamper {
            hand.clear();
            context.stock.clear();
            context.mode = GameMode::Closed;
            context.trump = card;
        }
        card
    }

    fn announce_nine_of_trumps(&mut self, _hand: Vec<Card>, _context: TrickContext) -> bool {
        self.declaration_requests += 1;
        self.nine_of_trumps
    }

    fn announce_marriage(&mut self, _hand: Vec<Card>, _context: TrickContext) -> bool {
        self.declaration_requests += 1;
        self.marriage
    }

    fn close_the_game(&mut self, _hand: Vec<Card>, _context: TrickContext) -> bool {
        self.declaration_requests += 1;
        self.close
    }

    fn go_out(&mut self) -> bool {
        self.declaration_requests += 1;
        self.going_out || (self.going_out_after_declaring && self.played_this_trick)
    }

    fn on_finish_game(&mut self, winner_name: Option<&str>) {
        self.finished.push(winner_name.map(String::from));
    }

    fn on_trick_done(&mut self, result: &TrickCompletedResult) {
        self.played_this_trick = false;
        self.tricks.push(result.clone());
    }
}
