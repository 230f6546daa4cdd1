use roster_game::models::player::Player;
use roster_types::errors::ApplicationError;

use crate::{paging::PageRequest, specification::PlayerSpec};

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns one page of players matching `spec`, sorted by `page.order`.
    /// A page past the end is empty.
    async fn find_all(
        &self,
        spec: &PlayerSpec,
        page: &PageRequest,
    ) -> Result<Vec<Player>, ApplicationError>;

    /// Counts every player matching `spec`, regardless of pagination.
    async fn count(&self, spec: &PlayerSpec) -> Result<i64, ApplicationError>;

    /// Returns a player by id, if any.
    async fn find_by_id(&self, player_id: i64) -> Result<Option<Player>, ApplicationError>;

    async fn exists_by_id(&self, player_id: i64) -> Result<bool, ApplicationError>;

    /// Saves a player (creates if `id` is 0, updates otherwise) and returns the
    /// stored record with its assigned id.
    async fn save(&self, player: &Player) -> Result<Player, ApplicationError>;

    async fn delete_by_id(&self, player_id: i64) -> Result<(), ApplicationError>;
}
