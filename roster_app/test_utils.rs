#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::BTreeMap,
        sync::{Arc, Mutex},
    };

    use roster_game::models::player::Player;
    use roster_types::{
        errors::{ApplicationError, DbError},
        player::PlayerOrder,
    };

    use crate::{
        paging::PageRequest,
        repository::PlayerRepository,
        specification::PlayerSpec,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    #[derive(Default)]
    struct MockPlayerStore {
        players: BTreeMap<i64, Player>,
        last_id: i64,
        saves: usize,
    }

    /// In-memory player store. Clones share the same data.
    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        store: Arc<Mutex<MockPlayerStore>>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Inserts players as they are, keeping their ids.
        pub fn add_players(&self, players: impl IntoIterator<Item = Player>) {
            let mut store = self.store.lock().unwrap();
            for player in players {
                store.last_id = store.last_id.max(player.id);
                store.players.insert(player.id, player);
            }
        }

        /// Number of `save` calls received so far.
        pub fn save_calls(&self) -> usize {
            self.store.lock().unwrap().saves
        }

        pub fn player_count(&self) -> usize {
            self.store.lock().unwrap().players.len()
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn find_all(
            &self,
            spec: &PlayerSpec,
            page: &PageRequest,
        ) -> Result<Vec<Player>, ApplicationError> {
            let store = self.store.lock().unwrap();
            let mut players: Vec<Player> = store
                .players
                .values()
                .filter(|p| spec.matches(p))
                .cloned()
                .collect();

            players.sort_by(|a, b| match page.order {
                PlayerOrder::Id => a.id.cmp(&b.id),
                PlayerOrder::Name => a.name.cmp(&b.name),
                PlayerOrder::Experience => a.experience.cmp(&b.experience),
                PlayerOrder::Birthday => a.birthday.cmp(&b.birthday),
                PlayerOrder::Level => a.level.cmp(&b.level),
            });

            Ok(players
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .collect())
        }

        async fn count(&self, spec: &PlayerSpec) -> Result<i64, ApplicationError> {
            let store = self.store.lock().unwrap();
            Ok(store.players.values().filter(|p| spec.matches(p)).count() as i64)
        }

        async fn find_by_id(&self, player_id: i64) -> Result<Option<Player>, ApplicationError> {
            Ok(self.store.lock().unwrap().players.get(&player_id).cloned())
        }

        async fn exists_by_id(&self, player_id: i64) -> Result<bool, ApplicationError> {
            Ok(self.store.lock().unwrap().players.contains_key(&player_id))
        }

        async fn save(&self, player: &Player) -> Result<Player, ApplicationError> {
            let mut store = self.store.lock().unwrap();
            store.saves += 1;

            let mut saved = player.clone();
            if saved.id == 0 {
                store.last_id += 1;
                saved.id = store.last_id;
            }
            store.players.insert(saved.id, saved.clone());
            Ok(saved)
        }

        async fn delete_by_id(&self, player_id: i64) -> Result<(), ApplicationError> {
            self.store.lock().unwrap().players.remove(&player_id);
            Ok(())
        }
    }

    /// A store that fails every call, to check error propagation.
    #[derive(Default, Clone)]
    pub struct FailingPlayerRepository {}

    fn store_down() -> ApplicationError {
        ApplicationError::Db(DbError::Transaction("store unavailable".to_string()))
    }

    #[async_trait]
    impl PlayerRepository for FailingPlayerRepository {
        async fn find_all(
            &self,
            _spec: &PlayerSpec,
            _page: &PageRequest,
        ) -> Result<Vec<Player>, ApplicationError> {
            Err(store_down())
        }

        async fn count(&self, _spec: &PlayerSpec) -> Result<i64, ApplicationError> {
            Err(store_down())
        }

        async fn find_by_id(&self, _player_id: i64) -> Result<Option<Player>, ApplicationError> {
            Err(store_down())
        }

        async fn exists_by_id(&self, _player_id: i64) -> Result<bool, ApplicationError> {
            Err(store_down())
        }

        async fn save(&self, _player: &Player) -> Result<Player, ApplicationError> {
            Err(store_down())
        }

        async fn delete_by_id(&self, _player_id: i64) -> Result<(), ApplicationError> {
            Err(store_down())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        players: MockPlayerRepository,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_repository(players: MockPlayerRepository) -> Self {
            Self { players }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            Arc::new(self.players.clone())
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct FailingUnitOfWork {}

    #[async_trait]
    impl<'a> UnitOfWork<'a> for FailingUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            Arc::new(FailingPlayerRepository::default())
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    /// Hands out units of work over one shared in-memory store.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        players: MockPlayerRepository,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn players(&self) -> &MockPlayerRepository {
            &self.players
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            Ok(Box::new(MockUnitOfWork::with_repository(
                self.players.clone(),
            )))
        }
    }
}
