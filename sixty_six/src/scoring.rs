use crate::PlayerState;

/// Points needed to win a deal.
pub const WINNING_POINTS: u32 = 66;
/// Deal points needed to win the game.
pub const GAME_POINTS_TO_WIN: u32 = 7;
/// Bonus for taking the last trick when the deal is played out.
pub const LAST_TRICK_BONUS: u32 = 10;
/// Awarded to the opponent when the closer falls short of 66.
pub const CLOSING_PENALTY_POINTS: u32 = 2;
/// As above, when the opponent hasn't taken a single trick.
pub const CLOSING_PENALTY_POINTS_NO_TRICK: u32 = 3;
/// Carried over to the next decided deal after a draw.
pub const DRAW_CARRY_POINTS: u32 = 1;

/// How a deal came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealEnding {
    /// All cards were played and nobody closed the stock.
    Natural,
    /// The given player closed the stock.
    Closed { closer: usize },
    /// The given player claimed to have reached 66.
    WentOut { player: usize },
}

/// The award of one deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DealOutcome {
    /// `None` for a draw.
    pub winner: Option<usize>,
    /// Deal points for the winner, or the carry-over after a draw.
    pub points: u32,
}

/// Deal points won against `loser`: 3 if they got nothing at all, 2 if they
/// stayed below 33, else 1.
pub fn deal_points(loser: &PlayerState) -> u32 {
    if loser.points == 0 && !loser.has_won_trick {
        3
    } else if loser.points < WINNING_POINTS / 2 {
        2
    } else {
        1
    }
}

/// Scores a finished deal. `players` are indexed the same way as the player
/// indices in `ending`.
pub fn determine_winner(players: &[PlayerState; 2], ending: DealEnding) -> DealOutcome {
    match ending {
        DealEnding::WentOut { player } => {
            let opponent = 1 - player;
            if players[player].points >= WINNING_POINTS {
                won_by(player, deal_points(&players[opponent]))
            } else {
                won_by(opponent, deal_points(&players[player]))
            }
        }
        DealEnding::Closed { closer } => {
            let opponent = 1 - closer;
            if players[closer].points >= WINNING_POINTS {
                won_by(closer, deal_points(&players[opponent]))
            } else if !players[opponent].has_won_trick {
                won_by(opponent, CLOSING_PENALTY_POINTS_NO_TRICK)
            } else {
                won_by(opponent, CLOSING_PENALTY_POINTS)
            }
        }
        DealEnding::Natural => {
            let reached = [
                players[0].points >= WINNING_POINTS,
                players[1].points >= WINNING_POINTS,
            ];
            match reached {
                [true, false] => won_by(0, deal_points(&players[1])),
                [false, true] => won_by(1, deal_points(&players[0])),
                // Both or neither reached 66
                _ => DealOutcome {
                    winner: None,
                    points: DRAW_CARRY_POINTS,
                },
            }
        }
    }
}

fn won_by(winner: usize, points: u32) -> DealOutcome {
    DealOutcome {
        winner: Some(winner),
        points,
    }
}
