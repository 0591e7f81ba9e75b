use sixty_six::{
    exchange_nine_of_trumps, marriage_bonus, resolve_trick, validate_closing,
    validate_nine_of_trumps, Announcement, Card, GameMode, Stock, TrickCompletedResult,
    TrickContext,
};
use tracing::debug;

use crate::error::RulesNotFollowed;
use crate::player::PlayerWithGameState;
use crate::recording::Recorder;

/// The mutable state of one deal, shared by all of its tricks.
#[derive(Clone, Debug)]
pub struct DealState {
    pub mode: GameMode,
    pub trump: Card,
    pub stock: Stock,
    /// The player who closed the stock, if anyone did.
    pub closed_by: Option<usize>,
    /// The player who claimed 66, if anyone did.
    pub going_out: Option<usize>,
}

impl DealState {
    pub fn new(trump: Card, stock: Stock) -> Self {
        Self {
            mode: GameMode::Normal,
            trump,
            stock,
            closed_by: None,
            going_out: None,
        }
    }

    /// A fresh copy of what a bot is allowed to see.
    pub fn context(
        &self,
        opponent_card: Option<Card>,
        opponent_announcements: &[Announcement],
    ) -> TrickContext {
        TrickContext {
            mode: self.mode,
            trump: self.trump,
            stock: self.stock.cards().to_vec(),
            opponent_card,
            opponent_announcements: opponent_announcements.to_vec(),
        }
    }
}

/// How a call to [`run_trick`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrickEnd {
    /// Both cards were played. `winner` leads the next trick.
    Played { winner: usize },
    /// The leader went out before playing a card.
    WentOut,
}

/// Plays one trick led by `players[leader]`.
///
/// A leader who has already won a trick first gets to swap the nine of trumps,
/// declare a marriage, go out, and close the stock, in that order. The trick
/// in which the stock is closed is still played under the old rules.
/// Declarations that don't hold up are dropped without telling anyone. Only a
/// bot that keeps playing illegal cards produces an error.
pub fn run_trick(
    players: &mut [PlayerWithGameState; 2],
    leader: usize,
    deal: &mut DealState,
    recorder: &mut Option<Recorder>,
) -> Result<TrickEnd, RulesNotFollowed> {
    let follower = 1 - leader;
    let trump = deal.trump;
    let mut announcements = Vec::new();
    let mut marriage_declared = false;
    // Takes effect from the next trick on
    let mut closing = false;

    if players[leader].state.has_won_trick {
        if players[leader].request_nine_of_trumps(&deal.context(None, &[])) {
            let hand = players[leader].state.hand;
            match validate_nine_of_trumps(hand, trump, &deal.stock, None) {
                Ok(()) => {
                    players[leader].state.hand =
                        exchange_nine_of_trumps(hand, trump, &mut deal.stock);
                    announcements.push(Announcement::NineOfTrumps);
                    debug!(player = players[leader].name(), "Swapped the nine of trumps");
                }
                Err(err) => debug!(player = players[leader].name(), %err, "Nine of trumps refused"),
            }
        }

        marriage_declared = players[leader].request_marriage(&deal.context(None, &[]));
        if marriage_declared && deal.mode == GameMode::Closed {
            debug!(player = players[leader].name(), "No marriages in a closed game");
            marriage_declared = false;
        }

        if players[leader].request_going_out() {
            debug!(player = players[leader].name(), "Going out");
            deal.going_out = Some(leader);
            return Ok(TrickEnd::WentOut);
        }

        if players[leader].request_closing(&deal.context(None, &[])) && deal.mode == GameMode::Normal
        {
            match validate_closing(&deal.stock) {
                Ok(()) => closing = true,
                Err(err) => debug!(player = players[leader].name(), %err, "Closing refused"),
            }
        }
    }

    let first_card = players[leader].request_card(&deal.context(None, &[]))?;

    let mut going_out_after_trick = false;
    if marriage_declared {
        match marriage_bonus(first_card, players[leader].state.hand, trump) {
            Ok(bonus) => {
                players[leader].state.points += bonus;
                announcements.push(Announcement::Marriage);
                going_out_after_trick = players[leader].request_going_out();
            }
            Err(err) => debug!(player = players[leader].name(), %err, "Marriage refused"),
        }
    }

    let second_card =
        players[follower].request_card(&deal.context(Some(first_card), &announcements))?;

    let outcome = resolve_trick(first_card, second_card, trump);
    players[leader].state.hand = players[leader].state.hand.remove(first_card);
    players[follower].state.hand = players[follower].state.hand.remove(second_card);

    let (winner, loser) = if outcome.leader_wins(first_card) {
        (leader, follower)
    } else {
        (follower, leader)
    };
    players[winner].state.points += outcome.points;
    players[winner].state.has_won_trick = true;

    debug!(
        "{} - {} | winner is {}, +{} (total: {})",
        first_card,
        second_card,
        players[winner].name(),
        outcome.points,
        players[winner].state.points
    );

    let result = TrickCompletedResult {
        announcements,
        first_player_card: first_card,
        second_player_card: second_card,
        trump,
        mode: deal.mode,
        trick_points: outcome.points,
        winner_name: String::from(players[winner].name()),
    };
    players[winner].notify_trick_done(&result);
    players[loser].notify_trick_done(&result);
    if let Some(recorder) = recorder {
        recorder.store_trick(result);
    }

    if closing {
        debug!(player = players[leader].name(), "Closed the game");
        deal.mode = GameMode::Closed;
        deal.closed_by = Some(leader);
    }
    if going_out_after_trick {
        debug!(player = players[leader].name(), "Going out after the marriage");
        deal.going_out = Some(leader);
    }

    Ok(TrickEnd::Played { winner })
}

#[cfg(test)]
mod tests {
    use sixty_six::{card, CardsSet, RuleViolation};

    use super::*;
    use crate::test_bots::ScriptedBot;

    fn deal_state(trump: Card, stock: &[Card]) -> DealState {
        DealState::new(trump, Stock::new(stock.to_vec()))
    }

    fn seat(player: &mut PlayerWithGameState, hand: &[Card], has_won_trick: bool) {
        player.state.hand = CardsSet::from_iter(hand);
        player.state.has_won_trick = has_won_trick;
    }

    #[test]
    fn nine_exchange_and_royal_marriage() {
        let mut leader = ScriptedBot::new("leader").plays(&[card!("K♥")]);
        leader.nine_of_trumps = true;
        leader.marriage = true;
        let mut follower = ScriptedBot::new("follower").plays(&[card!("J♣")]);
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("9♥"), card!("K♥"), card!("Q♥"), card!("J♠")], true);
        seat(&mut players[1], &[card!("J♣"), card!("A♣")], false);
        players[0].state.points = 10;
        let trump = card!("A♥");
        let mut deal = deal_state(trump, &[card!("Q♣"), card!("K♣"), card!("A♥")]);

        let end = run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        assert_eq!(end, TrickEnd::Played { winner: 0 });
        // 40 for the royal marriage, 4 + 2 for the trick
        assert_eq!(players[0].state.points, 10 + 40 + 6);
        assert_eq!(
            players[0].state.hand,
            CardsSet::from_iter([card!("A♥"), card!("Q♥"), card!("J♠")])
        );
        assert_eq!(players[1].state.hand, CardsSet::from_iter([card!("A♣")]));
        assert_eq!(deal.stock.face_up(), Some(card!("9♥")));
        assert_eq!(deal.trump, trump);
        assert_eq!(deal.going_out, None);
        drop(players);

        let shown = &follower.contexts[0];
        assert_eq!(shown.opponent_card, Some(card!("K♥")));
        assert_eq!(
            shown.opponent_announcements,
            vec![Announcement::NineOfTrumps, Announcement::Marriage]
        );
        assert_eq!(leader.tricks.len(), 1);
        assert_eq!(follower.tricks[0].trick_points, 6);
        assert_eq!(follower.tricks[0].winner_name, "leader");
    }

    #[test]
    fn first_trick_has_no_declarations() {
        let mut leader = ScriptedBot::new("leader").plays(&[card!("Q♣")]);
        leader.nine_of_trumps = true;
        leader.marriage = true;
        leader.going_out = true;
        let mut follower = ScriptedBot::new("follower").plays(&[card!("K♣")]);
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("Q♣"), card!("J♠"), card!("9♥")], false);
        seat(&mut players[1], &[card!("K♣"), card!("J♦")], false);
        let mut deal = deal_state(card!("A♥"), &[card!("A♠"), card!("Q♠"), card!("A♥")]);

        let end = run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        assert_eq!(end, TrickEnd::Played { winner: 1 });
        assert_eq!(players[1].state.points, 7);
        assert!(players[1].state.has_won_trick);
        assert!(!players[0].state.has_won_trick);
        drop(players);
        assert_eq!(leader.declaration_requests, 0);
    }

    #[test]
    fn going_out_ends_before_any_card() {
        let mut leader = ScriptedBot::new("leader");
        leader.going_out = true;
        let mut follower = ScriptedBot::new("follower");
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("Q♣")], true);
        seat(&mut players[1], &[card!("K♣")], true);
        let mut deal = deal_state(card!("A♥"), &[card!("A♠"), card!("Q♠"), card!("A♥")]);

        let end = run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        assert_eq!(end, TrickEnd::WentOut);
        assert_eq!(deal.going_out, Some(0));
        assert_eq!(players[0].state.hand.len(), 1);
        drop(players);
        assert_eq!(leader.play_requests, 0);
        assert_eq!(follower.play_requests, 0);
    }

    #[test]
    fn closing_applies_from_the_next_trick() {
        let mut leader = ScriptedBot::new("leader").plays(&[card!("K♣"), card!("Q♣")]);
        leader.close = true;
        // Discards in the closing trick, then tries to duck under Q♣
        let mut follower =
            ScriptedBot::new("follower").plays(&[card!("J♦"), card!("9♣"), card!("A♣")]);
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("K♣"), card!("Q♣")], true);
        seat(&mut players[1], &[card!("J♦"), card!("9♣"), card!("A♣")], true);
        let mut deal = deal_state(card!("A♥"), &[card!("A♠"), card!("Q♠"), card!("A♥")]);

        let end = run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        assert_eq!(end, TrickEnd::Played { winner: 0 });
        assert_eq!(deal.mode, GameMode::Closed);
        assert_eq!(deal.closed_by, Some(0));
        assert_eq!(players[0].state.points, 6);

        let end = run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        assert_eq!(end, TrickEnd::Played { winner: 1 });
        assert_eq!(players[1].state.points, 14);
        drop(players);
        assert_eq!(follower.play_requests, 3);
        assert_eq!(follower.contexts[0].mode, GameMode::Normal);
        assert_eq!(follower.contexts[1].mode, GameMode::Closed);
        assert_eq!(follower.tricks[0].mode, GameMode::Normal);
        assert_eq!(follower.tricks[1].mode, GameMode::Closed);
    }

    #[test]
    fn closing_a_depleted_stock_is_ignored() {
        let mut leader = ScriptedBot::new("leader").plays(&[card!("K♣")]);
        leader.close = true;
        let mut follower = ScriptedBot::new("follower").plays(&[card!("J♦")]);
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("K♣")], true);
        seat(&mut players[1], &[card!("J♦"), card!("9♣")], true);
        let mut deal = deal_state(card!("A♥"), &[card!("Q♠"), card!("A♥")]);

        run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        assert_eq!(deal.mode, GameMode::Normal);
        assert_eq!(deal.closed_by, None);
    }

    #[test]
    fn no_marriage_in_closed_game() {
        let mut leader = ScriptedBot::new("leader").plays(&[card!("K♠")]);
        leader.marriage = true;
        let mut follower = ScriptedBot::new("follower").plays(&[card!("9♠")]);
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("K♠"), card!("Q♠")], true);
        seat(&mut players[1], &[card!("9♠"), card!("J♦")], true);
        let mut deal = deal_state(card!("A♥"), &[]);
        deal.mode = GameMode::Closed;

        run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        assert_eq!(players[0].state.points, 4);
        drop(players);
        assert!(follower.contexts[0].opponent_announcements.is_empty());
    }

    #[test]
    fn marriage_with_wrong_card_gives_no_bonus() {
        let mut leader = ScriptedBot::new("leader").plays(&[card!("J♠")]);
        leader.marriage = true;
        let mut follower = ScriptedBot::new("follower").plays(&[card!("9♠")]);
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("K♠"), card!("Q♠"), card!("J♠")], true);
        seat(&mut players[1], &[card!("9♠"), card!("J♦")], true);
        let mut deal = deal_state(card!("A♥"), &[card!("A♠"), card!("Q♣"), card!("A♥")]);

        run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        assert_eq!(players[0].state.points, 2);
    }

    #[test]
    fn marriage_offers_going_out() {
        let mut leader = ScriptedBot::new("leader").plays(&[card!("Q♠")]);
        leader.marriage = true;
        leader.going_out_after_declaring = true;
        let mut follower = ScriptedBot::new("follower").plays(&[card!("9♠")]);
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("K♠"), card!("Q♠")], true);
        seat(&mut players[1], &[card!("9♠"), card!("J♦")], true);
        let mut deal = deal_state(card!("A♥"), &[card!("A♠"), card!("Q♣"), card!("A♥")]);

        let end = run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        assert_eq!(end, TrickEnd::Played { winner: 0 });
        assert_eq!(deal.going_out, Some(0));
        assert_eq!(players[0].state.points, 23);
    }

    #[test]
    fn tenth_illegal_card_is_fatal() {
        let mut leader = ScriptedBot::new("cheater").plays(&[card!("A♠"); 20]);
        let mut follower = ScriptedBot::new("follower");
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("K♠"), card!("Q♠")], false);
        seat(&mut players[1], &[card!("9♠"), card!("J♦")], false);
        let mut deal = deal_state(card!("A♥"), &[card!("A♣"), card!("Q♣"), card!("A♥")]);

        let err = run_trick(&mut players, 0, &mut deal, &mut None).unwrap_err();

        assert_eq!(err.player, "cheater");
        assert_eq!(err.attempts, 10);
        assert_eq!(err.violation, RuleViolation::NotInHand { card: card!("A♠") });
        drop(players);
        assert_eq!(leader.play_requests, 10);
    }

    #[test]
    fn ninth_illegal_card_is_still_forgiven() {
        let mut script = vec![card!("A♠"); 9];
        script.push(card!("K♠"));
        let mut leader = ScriptedBot::new("leader").plays(&script);
        let mut follower = ScriptedBot::new("follower");
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("K♠"), card!("Q♠")], false);
        seat(&mut players[1], &[card!("9♠"), card!("J♦")], false);
        let mut deal = deal_state(card!("A♥"), &[card!("A♣"), card!("Q♣"), card!("A♥")]);

        let end = run_trick(&mut players, 0, &mut deal, &mut None);

        assert!(end.is_ok());
        drop(players);
        assert_eq!(leader.play_requests, 10);
    }

    #[test]
    fn tampering_with_copies_has_no_effect() {
        let mut leader = ScriptedBot::new("leader").plays(&[card!("A♠"), card!("K♠")]);
        leader.tamper = true;
        let mut follower = ScriptedBot::new("follower").plays(&[card!("9♠")]);
        let mut players = [
            PlayerWithGameState::new(&mut leader),
            PlayerWithGameState::new(&mut follower),
        ];
        seat(&mut players[0], &[card!("K♠"), card!("Q♠")], false);
        seat(&mut players[1], &[card!("9♠"), card!("J♦")], false);
        let stock = [card!("A♣"), card!("Q♣"), card!("A♥")];
        let mut deal = deal_state(card!("A♥"), &stock);

        run_trick(&mut players, 0, &mut deal, &mut None).unwrap();

        // The A♠ pushed into the copy was rejected
        assert_eq!(deal.stock.cards(), &stock);
        assert_eq!(deal.mode, GameMode::Normal);
        assert_eq!(players[0].state.hand, CardsSet::from_iter([card!("Q♠")]));
        drop(players);
        assert_eq!(leader.play_requests, 2);
        assert_eq!(leader.hands[1], vec![card!("Q♠"), card!("K♠")]);
        assert_eq!(leader.contexts[1].stock, stock.to_vec());
        assert_eq!(leader.contexts[1].mode, GameMode::Normal);
    }
}
