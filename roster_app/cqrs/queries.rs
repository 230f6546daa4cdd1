use roster_game::models::player::Player;

use crate::{cqrs::Query, params::Params};

/// Fetch the player entity by player id.
pub struct GetPlayerById {
    pub player_id: i64,
}

impl Query for GetPlayerById {
    type Output = Player;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPage {
    pub players: Vec<Player>,
    /// Players matching the filters across all pages.
    pub total: i64,
}

/// Fetch a filtered, sorted page of players from raw request parameters.
pub struct ListPlayers {
    pub params: Params,
}

impl Query for ListPlayers {
    type Output = PlayerPage;
}

/// Count players matching the filters in the request parameters.
/// Paging and ordering parameters are ignored.
pub struct CountPlayers {
    pub params: Params,
}

impl Query for CountPlayers {
    type Output = i64;
}
