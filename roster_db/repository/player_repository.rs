use sqlx::{Postgres, QueryBuilder, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use roster_app::{
    paging::PageRequest,
    repository::PlayerRepository,
    specification::{PlayerFilter, PlayerSpec},
};
use roster_game::models::player::Player;
use roster_types::{
    Result,
    errors::{ApplicationError, DbError},
};

use crate::models::{self as db_models};

const PLAYER_COLUMNS: &str =
    "id, name, title, race, profession, experience, level, until_next_level, birthday, banned";

/// Implements PlayerRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresPlayerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPlayerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

/// Appends a `PlayerSpec` as a `WHERE` clause, one bound `AND` term per filter.
fn push_spec(qb: &mut QueryBuilder<'static, Postgres>, spec: &PlayerSpec) {
    qb.push(" WHERE TRUE");

    for filter in spec.filters() {
        match filter {
            PlayerFilter::NameContains(needle) => {
                qb.push(" AND strpos(name, ")
                    .push_bind(needle.clone())
                    .push(") > 0");
            }
            PlayerFilter::TitleContains(needle) => {
                qb.push(" AND strpos(title, ")
                    .push_bind(needle.clone())
                    .push(") > 0");
            }
            PlayerFilter::RaceIs(race) => {
                qb.push(" AND race = ")
                    .push_bind(db_models::Race::from(*race));
            }
            PlayerFilter::ProfessionIs(profession) => {
                qb.push(" AND profession = ")
                    .push_bind(db_models::Profession::from(*profession));
            }
            PlayerFilter::BornAfter(millis) => {
                qb.push(" AND birthday >= to_timestamp(CAST(")
                    .push_bind(*millis)
                    .push(" AS DOUBLE PRECISION) / 1000)");
            }
            PlayerFilter::BornBefore(millis) => {
                qb.push(" AND birthday <= to_timestamp(CAST(")
                    .push_bind(*millis)
                    .push(" AS DOUBLE PRECISION) / 1000)");
            }
            PlayerFilter::BannedIs(banned) => {
                qb.push(" AND banned = ").push_bind(*banned);
            }
            PlayerFilter::MinExperience(min) => {
                qb.push(" AND experience >= ").push_bind(*min);
            }
            PlayerFilter::MaxExperience(max) => {
                qb.push(" AND experience <= ").push_bind(*max);
            }
            PlayerFilter::MinLevel(min) => {
                qb.push(" AND level >= ").push_bind(*min);
            }
            PlayerFilter::MaxLevel(max) => {
                qb.push(" AND level <= ").push_bind(*max);
            }
        }
    }
}

fn select_page_query(spec: &PlayerSpec, page: &PageRequest) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {PLAYER_COLUMNS} FROM players"));
    push_spec(&mut qb, spec);

    // Single-key sort: ties come back in whatever order Postgres picks.
    qb.push(" ORDER BY ")
        .push(page.order.field_name())
        .push(" LIMIT ")
        .push_bind(page.limit())
        .push(" OFFSET ")
        .push_bind(page.offset());
    qb
}

fn count_query(spec: &PlayerSpec) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM players");
    push_spec(&mut qb, spec);
    qb
}

fn db_error(e: sqlx::Error) -> ApplicationError {
    tracing::error!("Player store error: {e}");
    ApplicationError::Db(DbError::Database(e))
}

#[async_trait::async_trait]
impl<'a> PlayerRepository for PostgresPlayerRepository<'a> {
    async fn find_all(&self, spec: &PlayerSpec, page: &PageRequest) -> Result<Vec<Player>> {
        let mut qb = select_page_query(spec, page);
        let mut tx_guard = self.tx.lock().await;

        let players = qb
            .build_query_as::<db_models::Player>()
            .fetch_all(&mut *tx_guard.as_mut())
            .await
            .map_err(db_error)?;

        Ok(players.into_iter().map(Into::into).collect())
    }

    async fn count(&self, spec: &PlayerSpec) -> Result<i64> {
        let mut qb = count_query(spec);
        let mut tx_guard = self.tx.lock().await;

        qb.build_query_scalar::<i64>()
            .fetch_one(&mut *tx_guard.as_mut())
            .await
            .map_err(db_error)
    }

    async fn find_by_id(&self, player_id: i64) -> Result<Option<Player>> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1");
        let mut tx_guard = self.tx.lock().await;
        let player = sqlx::query_as::<_, db_models::Player>(&sql)
            .bind(player_id)
            .fetch_optional(&mut *tx_guard.as_mut())
            .await
            .map_err(db_error)?;

        Ok(player.map(Into::into))
    }

    async fn exists_by_id(&self, player_id: i64) -> Result<bool> {
        let mut tx_guard = self.tx.lock().await;
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)")
            .bind(player_id)
            .fetch_one(&mut *tx_guard.as_mut())
            .await
            .map_err(db_error)
    }

    async fn save(&self, player: &Player) -> Result<Player> {
        let race = db_models::Race::from(player.race);
        let profession = db_models::Profession::from(player.profession);
        let mut tx_guard = self.tx.lock().await;

        let saved = if player.id == 0 {
            let sql = format!(
                r#"
                INSERT INTO players
                    (name, title, race, profession, experience, level, until_next_level, birthday, banned)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING {PLAYER_COLUMNS}
                "#
            );
            sqlx::query_as::<_, db_models::Player>(&sql)
                .bind(&player.name)
                .bind(&player.title)
                .bind(race)
                .bind(profession)
                .bind(player.experience)
                .bind(player.level)
                .bind(player.until_next_level)
                .bind(player.birthday)
                .bind(player.banned)
                .fetch_one(&mut *tx_guard.as_mut())
                .await
                .map_err(db_error)?
        } else {
            let sql = format!(
                r#"
                UPDATE players
                SET
                    name = $2,
                    title = $3,
                    race = $4,
                    profession = $5,
                    experience = $6,
                    level = $7,
                    until_next_level = $8,
                    birthday = $9,
                    banned = $10
                WHERE id = $1
                RETURNING {PLAYER_COLUMNS}
                "#
            );
            sqlx::query_as::<_, db_models::Player>(&sql)
                .bind(player.id)
                .bind(&player.name)
                .bind(&player.title)
                .bind(race)
                .bind(profession)
                .bind(player.experience)
                .bind(player.level)
                .bind(player.until_next_level)
                .bind(player.birthday)
                .bind(player.banned)
                .fetch_optional(&mut *tx_guard.as_mut())
                .await
                .map_err(db_error)?
                .ok_or(DbError::PlayerNotFound(player.id))?
        };

        Ok(saved.into())
    }

    async fn delete_by_id(&self, player_id: i64) -> Result<()> {
        let mut tx_guard = self.tx.lock().await;
        sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(player_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
