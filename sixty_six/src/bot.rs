use crate::{Card, TrickContext, TrickCompletedResult};

/// The capabilities a strategy offers to the judge.
///
/// The judge treats every answer as untrusted: played cards are validated and
/// replayed up to a retry limit, and declarations that don't hold up are
/// dropped. Hands and contexts are handed over by value, so a bot may do
/// whatever it likes with them.
pub trait Bot {
    /// Used for reporting only.
    fn name(&self) -> &str;

    /// Pick one of the cards in `hand`.
    fn play_trick(&mut self, hand: Vec<Card>, context: TrickContext) -> Card;

    /// Whether to swap the nine of trumps for the face-up trump card.
    fn announce_nine_of_trumps(&mut self, hand: Vec<Card>, context: TrickContext) -> bool;

    /// Whether to declare a marriage. The card played next is taken as the spouse.
    fn announce_marriage(&mut self, hand: Vec<Card>, context: TrickContext) -> bool;

    /// Whether to close the stock.
    fn close_the_game(&mut self, hand: Vec<Card>, context: TrickContext) -> bool;

    /// Whether to claim 66 points and end the deal.
    fn go_out(&mut self) -> bool;

    /// Called once per deal with the deal's winner, if there is one.
    fn on_finish_game(&mut self, _winner_name: Option<&str>) {}

    /// Called once per trick after it is resolved.
    fn on_trick_done(&mut self, _result: &TrickCompletedResult) {}
}
