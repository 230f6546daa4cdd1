use std::sync::Arc;

use roster_game::{models::player::Player, validation::check_values};
use roster_types::{Result, errors::DbError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayer},
    uow::UnitOfWork,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player> {
        let repo = uow.players();

        let existing = repo
            .find_by_id(command.player_id)
            .await?
            .ok_or(DbError::PlayerNotFound(command.player_id))?;

        let mut player = existing.apply_update(&command.patch);
        check_values(&player)?;
        // Progression is refreshed on every update, even if experience is unchanged.
        player.refresh_progression();

        let saved = repo.save(&player).await?;
        tracing::info!(player_id = saved.id, level = saved.level, "Updated player");

        Ok(saved)
    }
}
