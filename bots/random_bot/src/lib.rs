use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use sixty_six::{deck, legal_cards, Bot, Card, CardsSet, TrickContext, WINNING_POINTS};
use sixty_six_bot_utils::{CardCounter, CardCountingWrapper, HasCardCounter};

/// Probability of picking from the whole deck instead of the legal cards.
const BLUNDER_PROBABILITY: f64 = 0.1;

/// Plays a random legal card most of the time, and now and then a card it
/// doesn't even hold. Announcements are coin flips.
pub struct RandomBot {
    name: String,
    rng: StdRng,
    counter: CardCounter,
}

impl RandomBot {
    pub fn new(name: &str, seed: u64) -> CardCountingWrapper<Self> {
        CardCountingWrapper::new(Self {
            name: String::from(name),
            rng: StdRng::seed_from_u64(seed),
            counter: CardCounter::default(),
        })
    }
}

impl HasCardCounter for RandomBot {
    fn get_counter(&mut self) -> &mut CardCounter {
        &mut self.counter
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn play_trick(&mut self, hand: Vec<Card>, context: TrickContext) -> Card {
        if self.rng.gen_bool(BLUNDER_PROBABILITY) {
            if let Some(card) = deck().into_iter().choose(&mut self.rng) {
                return card;
            }
        }
        let legal = legal_cards(
            context.trump,
            context.mode,
            CardsSet::from_iter(&hand),
            context.opponent_card,
        );
        legal
            .into_iter()
            .choose(&mut self.rng)
            .or_else(|| hand.first().copied())
            .unwrap_or(context.trump)
    }

    fn announce_nine_of_trumps(&mut self, _hand: Vec<Card>, _context: TrickContext) -> bool {
        self.rng.gen()
    }

    fn announce_marriage(&mut self, _hand: Vec<Card>, _context: TrickContext) -> bool {
        self.rng.gen()
    }

    fn close_the_game(&mut self, _hand: Vec<Card>, _context: TrickContext) -> bool {
        self.rng.gen_bool(0.1)
    }

    fn go_out(&mut self) -> bool {
        self.counter.own_points >= WINNING_POINTS
    }
}
