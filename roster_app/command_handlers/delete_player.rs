use std::sync::Arc;

use roster_types::{Result, errors::DbError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeletePlayer},
    uow::UnitOfWork,
};

pub struct DeletePlayerCommandHandler {}

impl Default for DeletePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePlayer> for DeletePlayerCommandHandler {
    async fn handle(
        &self,
        command: DeletePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let repo = uow.players();

        if !repo.exists_by_id(command.player_id).await? {
            return Err(DbError::PlayerNotFound(command.player_id).into());
        }
        repo.delete_by_id(command.player_id).await?;

        tracing::info!(player_id = command.player_id, "Deleted player");
        Ok(())
    }
}
