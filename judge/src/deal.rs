use rand::Rng;
use sixty_six::{
    determine_winner, shuffled_deck, Card, DealEnding, DealOutcome, GameMode, Stock,
    LAST_TRICK_BONUS,
};
use tracing::debug;

use crate::error::RulesNotFollowed;
use crate::player::PlayerWithGameState;
use crate::recording::Recorder;
use crate::trick::{run_trick, DealState, TrickEnd};

/// Cards dealt to each player per round of dealing. There are two rounds.
const CARDS_PER_ROUND: usize = 3;

/// Shuffles a fresh deck and plays one deal, `players[leader]` leading the first trick.
pub fn play_deal<R: Rng + ?Sized>(
    rng: &mut R,
    players: &mut [PlayerWithGameState; 2],
    leader: usize,
    recorder: &mut Option<Recorder>,
) -> Result<DealOutcome, RulesNotFollowed> {
    play_deal_with_deck(shuffled_deck(rng), players, leader, recorder)
}

/// Plays one deal with the cards in the given order, the first card being the
/// top of the deck.
///
/// `deck` must hold each of the 24 cards exactly once.
pub(crate) fn play_deal_with_deck(
    deck: Vec<Card>,
    players: &mut [PlayerWithGameState; 2],
    mut leader: usize,
    recorder: &mut Option<Recorder>,
) -> Result<DealOutcome, RulesNotFollowed> {
    let mut stock = Stock::new(deck);
    for player in players.iter_mut() {
        player.state.reset_deal();
    }
    for _ in 0..2 {
        players[leader].state.take(stock.deal(CARDS_PER_ROUND));
        players[1 - leader].state.take(stock.deal(CARDS_PER_ROUND));
    }
    // Can't fail, twelve cards are left after dealing a full deck
    let trump = stock.reveal_trump().expect("No cards left for the trump");
    debug!("{}", "=".repeat(30));
    debug!(%trump, leader = players[leader].name(), "New deal");

    if let Some(recorder) = recorder {
        recorder.start_deal(trump, players[leader].name());
    }

    let mut deal = DealState::new(trump, stock);
    while !players[leader].state.hand.is_empty() {
        let winner = match run_trick(players, leader, &mut deal, recorder)? {
            TrickEnd::WentOut => break,
            TrickEnd::Played { winner } => winner,
        };
        leader = winner;

        if deal.mode == GameMode::Normal {
            replenish(players, leader, &mut deal.stock);
            if deal.stock.is_empty() {
                debug!("Stock is empty, the game is now closed");
                deal.mode = GameMode::Closed;
            }
        }
        debug!(
            "Remaining stock (total cards {}): {}",
            deal.stock.len(),
            deal.stock
                .cards()
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        if deal.going_out.is_some() {
            break;
        }
    }

    let ending = match (deal.going_out, deal.closed_by) {
        (Some(player), _) => DealEnding::WentOut { player },
        (None, Some(closer)) => DealEnding::Closed { closer },
        (None, None) => {
            debug!(player = players[leader].name(), "Last trick, +{}", LAST_TRICK_BONUS);
            players[leader].state.points += LAST_TRICK_BONUS;
            DealEnding::Natural
        }
    };

    let outcome = determine_winner(&[players[0].state.clone(), players[1].state.clone()], ending);
    let winner_name = outcome
        .winner
        .map(|winner| String::from(players[winner].name()));
    debug!(
        ?ending,
        points = ?[players[0].state.points, players[1].state.points],
        winner = winner_name.as_deref(),
        deal_points = outcome.points,
        "Deal finished"
    );
    debug!("{}", "=".repeat(30));

    for player in players.iter_mut() {
        player.notify_finish_game(winner_name.as_deref());
    }
    if let Some(recorder) = recorder {
        recorder.finish_deal(winner_name.as_deref(), outcome.points);
    }
    Ok(outcome)
}

/// Each player draws one card from the stock, the trick's winner first.
fn replenish(players: &mut [PlayerWithGameState; 2], winner: usize, stock: &mut Stock) {
    for idx in [winner, 1 - winner] {
        if let Some(card) = stock.draw() {
            players[idx].state.take([card]);
        }
    }
}
