use async_trait::async_trait;
use std::sync::Arc;

use roster_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{ListPlayers, PlayerPage},
    },
    paging::build_page_request,
    specification::build_player_spec,
    uow::UnitOfWork,
};

pub struct ListPlayersHandler {}

impl ListPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPlayers> for ListPlayersHandler {
    async fn handle(
        &self,
        query: ListPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<<ListPlayers as Query>::Output, ApplicationError> {
        let spec = build_player_spec(&query.params)?;
        let page = build_page_request(&query.params, config.default_page_size)?;
        tracing::debug!(
            filters = spec.filters().len(),
            order = page.order.as_str(),
            page_number = page.page_number,
            page_size = page.page_size,
            "Listing players"
        );

        let repo = uow.players();
        let players = repo.find_all(&spec, &page).await?;
        let total = repo.count(&spec).await?;

        Ok(PlayerPage { players, total })
    }
}
