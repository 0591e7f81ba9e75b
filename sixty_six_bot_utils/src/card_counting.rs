use sixty_six::{
    is_royal_marriage, Announcement, Bot, Card, CardsSet, TrickCompletedResult,
    TrickContext, MARRIAGE_POINTS, ROYAL_MARRIAGE_POINTS,
};

/// What a bot can piece together from the trick results it has been shown.
///
/// This can be automatically updated by implementing [`HasCardCounter`] for your bot
/// and wrapping it in a [`CardCountingWrapper`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardCounter {
    /// Our points in this deal, marriages included.
    pub own_points: u32,
    /// The opponent's points in this deal, marriages included.
    pub opponent_points: u32,
    /// Every card that has been played in this deal.
    pub played: CardsSet,
    last_played: Option<Card>,
}

impl CardCounter {
    fn record(&mut self, own_name: &str, result: &TrickCompletedResult) {
        let won = result.winner_name == own_name;
        if won {
            self.own_points += result.trick_points;
        } else {
            self.opponent_points += result.trick_points;
        }
        if result.announcements.contains(&Announcement::Marriage) {
            let spouse = result.first_player_card;
            let bonus = if is_royal_marriage(result.trump, spouse) {
                ROYAL_MARRIAGE_POINTS
            } else {
                MARRIAGE_POINTS
            };
            if self.last_played == Some(spouse) {
                self.own_points += bonus;
            } else {
                self.opponent_points += bonus;
            }
        }
        self.played |= CardsSet::from_iter([result.first_player_card, result.second_player_card]);
        self.last_played = None;
    }
}

/// Implement this trait on your bot to allow it to be used with a [`CardCountingWrapper`].
///
/// Basically the same as `DerefMut<Target=CardCounter>`
pub trait HasCardCounter {
    fn get_counter(&mut self) -> &mut CardCounter;
}

/// Automatically counts points and cards for your bot.
pub struct CardCountingWrapper<T>
where
    T: HasCardCounter,
{
    bot: T,
}

impl<T> CardCountingWrapper<T>
where
    T: HasCardCounter,
{
    pub fn new(bot: T) -> Self {
        Self { bot }
    }
}

impl<T: HasCardCounter + Bot> Bot for CardCountingWrapper<T> {
    fn name(&self) -> &str {
        self.bot.name()
    }

    fn play_trick(&mut self, hand: Vec<Card>, context: TrickContext) -> Card {
        let card = self.bot.play_trick(hand, context);
        self.bot.get_counter().last_played = Some(card);
        card
    }

    fn announce_nine_of_trumps(&mut self, hand: Vec<Card>, context: TrickContext) -> bool {
        self.bot.announce_nine_of_trumps(hand, context)
    }

    fn announce_marriage(&mut self, hand: Vec<Card>, context: TrickContext) -> bool {
        self.bot.announce_marriage(hand, context)
    }

    fn close_the_game(&mut self, hand: Vec<Card>, context: TrickContext) -> bool {
        self.bot.close_the_game(hand, context)
    }

    fn go_out(&mut self) -> bool {
        self.bot.go_out()
    }

    fn on_finish_game(&mut self, winner_name: Option<&str>) {
        *self.bot.get_counter() = CardCounter::default();
        self.bot.on_finish_game(winner_name);
    }

    fn on_trick_done(&mut self, result: &TrickCompletedResult) {
        let name = self.bot.name().to_owned();
        self.bot.get_counter().record(&name, result);
        self.bot.on_trick_done(result);
    }
}
