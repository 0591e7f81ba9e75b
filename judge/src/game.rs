use std::cmp::Ordering;

use rand::Rng;
use sixty_six::{Bot, DealOutcome, GAME_POINTS_TO_WIN};
use tracing::debug;

use crate::deal::play_deal;
use crate::error::RulesNotFollowed;
use crate::player::PlayerWithGameState;
use crate::recording::Recorder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// Index of the winning bot, in the order they were passed to [`play_game`].
    pub winner: usize,
    pub game_points: [u32; 2],
    /// How many deals were played.
    pub deals: usize,
}

/// Plays deals until one bot has 7 game points.
///
/// The first leader is picked with `rng`, after that the lead alternates.
pub fn play_game<R: Rng + ?Sized>(
    rng: &mut R,
    bot_1: &mut dyn Bot,
    bot_2: &mut dyn Bot,
    recorder: &mut Option<Recorder>,
) -> Result<GameResult, RulesNotFollowed> {
    let mut players = [
        PlayerWithGameState::new(bot_1),
        PlayerWithGameState::new(bot_2),
    ];

    // Randomly pick a starting player
    let mut leader = if rng.gen::<bool>() { 1 } else { 0 };
    let mut pending_draw_points = 0;
    let mut deals = 0;
    let mut last_deal_winner = None;

    while players
        .iter()
        .all(|player| player.state.game_points < GAME_POINTS_TO_WIN)
    {
        let outcome = play_deal(rng, &mut players, leader, recorder)?;
        deals += 1;
        last_deal_winner = outcome.winner.or(last_deal_winner);
        award_deal_points(&mut players, &mut pending_draw_points, outcome);
        debug!(
            game_points = ?[players[0].state.game_points, players[1].state.game_points],
            pending_draw_points,
            "Game score"
        );
        leader = 1 - leader;
    }

    let game_points = [players[0].state.game_points, players[1].state.game_points];
    let winner = match game_points[0].cmp(&game_points[1]) {
        Ordering::Greater => 0,
        Ordering::Less => 1,
        // Can't happen, only one player scores per deal
        Ordering::Equal => last_deal_winner.unwrap_or(0),
    };
    debug!(winner = players[winner].name(), deals, "Game finished");

    Ok(GameResult {
        winner,
        game_points,
        deals,
    })
}

/// Adds a deal's award to the winner's game points, together with whatever
/// earlier draws left pending. A draw adds to the pending points instead.
pub fn award_deal_points(
    players: &mut [PlayerWithGameState; 2],
    pending_draw_points: &mut u32,
    outcome: DealOutcome,
) {
    match outcome.winner {
        Some(winner) => {
            players[winner].state.game_points += outcome.points + *pending_draw_points;
            *pending_draw_points = 0;
        }
        None => *pending_draw_points += outcome.points,
    }
}
