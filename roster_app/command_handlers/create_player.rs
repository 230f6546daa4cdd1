use std::sync::Arc;

use roster_game::{models::player::Player, validation::validate_new_player};
use roster_types::Result;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreatePlayer},
    uow::UnitOfWork,
};

pub struct CreatePlayerCommandHandler {}

impl Default for CreatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreatePlayer> for CreatePlayerCommandHandler {
    async fn handle(
        &self,
        command: CreatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player> {
        let player = validate_new_player(command.payload)?;
        let saved = uow.players().save(&player).await?;

        tracing::info!(
            player_id = saved.id,
            level = saved.level,
            "Created player {}",
            saved.name
        );
        Ok(saved)
    }
}
