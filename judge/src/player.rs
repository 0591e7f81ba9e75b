use sixty_six::{
    validate_play, Bot, Card, PlayerState, TrickCompletedResult, TrickContext,
};
use tracing::{debug, trace};

use crate::error::RulesNotFollowed;

/// How often a bot may try to play a card before the run is aborted.
pub const MAX_PLAY_ATTEMPTS: usize = 10;

/// A bot together with the judge's authoritative view of its state.
///
/// Bots only ever receive copies of the hand and context, so nothing they
/// do can touch `state`.
pub struct PlayerWithGameState<'a> {
    pub bot: &'a mut dyn Bot,
    pub state: PlayerState,
}

impl<'a> PlayerWithGameState<'a> {
    pub fn new(bot: &'a mut dyn Bot) -> Self {
        Self {
            bot,
            state: PlayerState::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.bot.name()
    }

    fn hand(&self) -> Vec<Card> {
        self.state.hand.to_vec()
    }

    /// Asks for a card until a legal one comes back.
    ///
    /// Fails on the [`MAX_PLAY_ATTEMPTS`]th illegal card in a row.
    pub fn request_card(&mut self, context: &TrickContext) -> Result<Card, RulesNotFollowed> {
        let mut attempts = 0;
        loop {
            trace!(name: "Requesting card", player = self.name(), hand = ?self.state.hand.to_vec(), ?context);
            let card = self.bot.play_trick(self.hand(), context.clone());
            attempts += 1;
            trace!(name: "Received card", player = self.name(), %card, attempts);

            match validate_play(
                card,
                context.trump,
                context.mode,
                self.state.hand,
                context.opponent_card,
            ) {
                Ok(()) => return Ok(card),
                Err(violation) if attempts >= MAX_PLAY_ATTEMPTS => {
                    return Err(RulesNotFollowed {
                        player: String::from(self.name()),
                        attempts,
                        violation,
                    });
                }
                Err(violation) => {
                    debug!(player = self.name(), attempts, %violation, "Rejected card");
                }
            }
        }
    }

    pub fn request_nine_of_trumps(&mut self, context: &TrickContext) -> bool {
        let answer = self.bot.announce_nine_of_trumps(self.hand(), context.clone());
        trace!(name: "Nine of trumps", player = self.name(), answer);
        answer
    }

    pub fn request_marriage(&mut self, context: &TrickContext) -> bool {
        let answer = self.bot.announce_marriage(self.hand(), context.clone());
        trace!(name: "Marriage", player = self.name(), answer);
        answer
    }

    pub fn request_closing(&mut self, context: &TrickContext) -> bool {
        let answer = self.bot.close_the_game(self.hand(), context.clone());
        trace!(name: "Closing", player = self.name(), answer);
        answer
    }

    pub fn request_going_out(&mut self) -> bool {
        let answer = self.bot.go_out();
        trace!(name: "Going out", player = self.name(), answer);
        answer
    }

    pub fn notify_trick_done(&mut self, result: &TrickCompletedResult) {
        self.bot.on_trick_done(result);
    }

    pub fn notify_finish_game(&mut self, winner_name: Option<&str>) {
        self.bot.on_finish_game(winner_name);
    }
}
