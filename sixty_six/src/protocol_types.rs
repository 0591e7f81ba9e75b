use serde::{Deserialize, Serialize};

use crate::Card;

/// Whether the follow-suit rules apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Cards are drawn after each trick and any card may be played.
    #[default]
    Normal,
    /// The stock was closed or ran out: no more drawing, follow suit is enforced.
    Closed,
}

/// Something the leader declared in the current trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Announcement {
    Marriage,
    NineOfTrumps,
}

/// What a bot gets to see when it is asked for a decision.
///
/// Every request carries its own copy, so nothing a bot does to it reaches
/// the judge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickContext {
    pub mode: GameMode,
    /// The card turned up at the start of the deal. Its suit is trump.
    pub trump: Card,
    /// The undealt cards. The last one is the face-up card at the bottom.
    pub stock: Vec<Card>,
    /// The leader's card, when asking the follower.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub opponent_card: Option<Card>,
    /// What the leader announced in this trick, when asking the follower.
    /// Empty if nothing was announced.
    #[serde(default)]
    pub opponent_announcements: Vec<Announcement>,
}

/// Sent to both players after every trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickCompletedResult {
    pub announcements: Vec<Announcement>,
    pub first_player_card: Card,
    pub second_player_card: Card,
    pub trump: Card,
    pub mode: GameMode,
    pub trick_points: u32,
    pub winner_name: String,
}
