use async_trait::async_trait;
use std::sync::Arc;

use roster_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::CountPlayers},
    specification::build_player_spec,
    uow::UnitOfWork,
};

pub struct CountPlayersHandler {}

impl CountPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<CountPlayers> for CountPlayersHandler {
    async fn handle(
        &self,
        query: CountPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<CountPlayers as Query>::Output, ApplicationError> {
        let spec = build_player_spec(&query.params)?;
        uow.players().count(&spec).await
    }
}

#[cfg(test)]
mod tests {
    use roster_game::test_utils::{PlayerFactoryOptions, player_factory};
    use roster_types::{errors::ErrorKind, player::Race};

    use super::*;
    use crate::{
        params::Params,
        test_utils::tests::{FailingUnitOfWork, MockPlayerRepository, MockUnitOfWork},
    };

    #[tokio::test]
    async fn test_count_ignores_paging() -> Result<(), ApplicationError> {
        let repo = MockPlayerRepository::new();
        repo.add_players((1..=5).map(|id| {
            player_factory(PlayerFactoryOptions {
                id: Some(id),
                race: Some(if id % 2 == 0 { Race::Orc } else { Race::Elf }),
                ..Default::default()
            })
        }));
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::with_repository(repo));
        let config = Arc::new(Config::default());
        let handler = CountPlayersHandler::new();

        let params = Params::from([
            ("race".to_string(), "ELF".to_string()),
            ("pageSize".to_string(), "1".to_string()),
            ("pageNumber".to_string(), "7".to_string()),
        ]);
        assert_eq!(handler.handle(CountPlayers { params }, &uow, &config).await?, 3);

        let total = handler
            .handle(
                CountPlayers {
                    params: Params::new(),
                },
                &uow,
                &config,
            )
            .await?;
        assert_eq!(total, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_count_with_bad_filter_never_reaches_the_store() {
        // The failing store would report a store failure if it were called.
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(FailingUnitOfWork::default());
        let config = Arc::new(Config::default());

        let params = Params::from([("minLevel".to_string(), "high".to_string())]);
        let err = CountPlayersHandler::new()
            .handle(CountPlayers { params }, &uow, &config)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRequest);
    }
}
