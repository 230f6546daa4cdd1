use roster_game::models::player::{Player, PlayerPayload};

use crate::cqrs::Command;

/// Validates a candidate and stores it as a new player.
#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub payload: PlayerPayload,
}

impl Command for CreatePlayer {
    type Output = Player;
}

/// Merges a sparse patch into an existing player.
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub player_id: i64,
    pub patch: PlayerPayload,
}

impl Command for UpdatePlayer {
    type Output = Player;
}

#[derive(Debug, Clone)]
pub struct DeletePlayer {
    pub player_id: i64,
}

impl Command for DeletePlayer {
    type Output = ();
}
