
use chrono::{TimeZone, Utc};
use rand::Rng;

use roster_app::{
    paging::PageRequest,
    repository::PlayerRepository,
    specification::{PlayerFilter, PlayerSpec},
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use roster_game::{
    models::player::Player,
    test_utils::{PlayerFactoryOptions, player_factory},
};
use roster_types::{
    Result,
    errors::{ApplicationError, ErrorKind},
    player::{PlayerOrder, Profession, Race},
};

use crate::test_utils::tests::setup_db;

// Every test runs in its own transaction, rolled back at the end. Rows get a
// fixed-width random title so queries only see the rows of their own test.
fn unique_title() -> String {
    format!("db-{:09}", rand::thread_rng().gen_range(0..1_000_000_000u32))
}

fn scoped(title: &str) -> PlayerSpec {
    PlayerSpec::all().and(PlayerFilter::TitleContains(title.to_string()))
}

fn millis(year: i32, month: u32, day: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
        .timestamp_millis()
}

fn names(players: &[Player]) -> Vec<&str> {
    players.iter().map(|p| p.name.as_str()).collect()
}

fn page(order: PlayerOrder, page_number: u32, page_size: u32) -> PageRequest {
    PageRequest {
        order,
        page_number,
        page_size,
    }
}

/// Bilbo (lvl 2), Bombur (lvl 13), Elrond (lvl 27), Ugluk (lvl 1).
async fn seed_company(repo: &dyn PlayerRepository, title: &str) -> Result<Vec<Player>> {
    let company = [
        ("Bilbo", Race::Hobbit, Profession::Rogue, 500, (2010, 1, 1), false),
        ("Bombur", Race::Dwarf, Profession::Warrior, 9_500, (2012, 6, 1), true),
        ("Elrond", Race::Elf, Profession::Cleric, 40_000, (2015, 3, 3), false),
        ("Ugluk", Race::Orc, Profession::Warrior, 100, (2020, 1, 1), true),
    ];

    let mut saved = Vec::new();
    for (name, race, profession, experience, (y, m, d), banned) in company {
        let player = player_factory(PlayerFactoryOptions {
            name: Some(name),
            title: Some(title),
            race: Some(race),
            profession: Some(profession),
            experience: Some(experience),
            birthday: Some(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
            banned: Some(banned),
            ..Default::default()
        });
        saved.push(repo.save(&player).await?);
    }
    Ok(saved)
}

#[tokio::test]
async fn test_filters_run_on_postgres() -> Result<(), ApplicationError> {
    let Some(provider) = setup_db().await? else {
        return Ok(());
    };
    let uow = provider.begin().await?;
    let repo = uow.players();
    let title = unique_title();
    seed_company(repo.as_ref(), &title).await?;

    let after_bombur = millis(2012, 6, 1) + 1;
    let cases = vec![
        (PlayerFilter::NameContains("Bo".to_string()), vec!["Bombur"]),
        (PlayerFilter::NameContains("bo".to_string()), vec!["Bilbo"]),
        (PlayerFilter::RaceIs(Race::Elf), vec!["Elrond"]),
        (
            PlayerFilter::ProfessionIs(Profession::Warrior),
            vec!["Bombur", "Ugluk"],
        ),
        (
            PlayerFilter::BornAfter(millis(2012, 6, 1)),
            vec!["Bombur", "Elrond", "Ugluk"],
        ),
        (PlayerFilter::BornAfter(after_bombur), vec!["Elrond", "Ugluk"]),
        (
            PlayerFilter::BornBefore(millis(2012, 6, 1)),
            vec!["Bilbo", "Bombur"],
        ),
        (PlayerFilter::BannedIs(true), vec!["Bombur", "Ugluk"]),
        (PlayerFilter::BannedIs(false), vec!["Bilbo", "Elrond"]),
        (
            PlayerFilter::MinExperience(500),
            vec!["Bilbo", "Bombur", "Elrond"],
        ),
        (
            PlayerFilter::MaxExperience(9_500),
            vec!["Bilbo", "Bombur", "Ugluk"],
        ),
        (PlayerFilter::MinLevel(13), vec!["Bombur", "Elrond"]),
        (PlayerFilter::MaxLevel(2), vec!["Bilbo", "Ugluk"]),
    ];

    for (filter, expected) in cases {
        let spec = scoped(&title).and(filter.clone());

        let found = repo.find_all(&spec, &page(PlayerOrder::Name, 0, 10)).await?;
        assert_eq!(names(&found), expected, "{filter:?}");
        assert_eq!(repo.count(&spec).await?, expected.len() as i64, "{filter:?}");
    }

    let spec = scoped(&title)
        .and(PlayerFilter::ProfessionIs(Profession::Warrior))
        .and(PlayerFilter::MinLevel(2));
    let found = repo.find_all(&spec, &page(PlayerOrder::Id, 0, 10)).await?;
    assert_eq!(names(&found), vec!["Bombur"]);

    drop(repo);
    uow.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn test_paging_and_ordering_on_postgres() -> Result<(), ApplicationError> {
    let Some(provider) = setup_db().await? else {
        return Ok(());
    };
    let uow = provider.begin().await?;
    let repo = uow.players();
    let title = unique_title();
    let seeded = seed_company(repo.as_ref(), &title).await?;
    let spec = scoped(&title);

    let first = repo
        .find_all(&spec, &page(PlayerOrder::Experience, 0, 3))
        .await?;
    assert_eq!(names(&first), vec!["Ugluk", "Bilbo", "Bombur"]);

    let second = repo
        .find_all(&spec, &page(PlayerOrder::Experience, 1, 3))
        .await?;
    assert_eq!(names(&second), vec!["Elrond"]);

    let past_end = repo
        .find_all(&spec, &page(PlayerOrder::Experience, 2, 3))
        .await?;
    assert!(past_end.is_empty());
    assert_eq!(repo.count(&spec).await?, 4);

    let by_birthday = repo
        .find_all(&spec, &page(PlayerOrder::Birthday, 0, 2))
        .await?;
    assert_eq!(names(&by_birthday), vec!["Bilbo", "Bombur"]);

    let by_level = repo.find_all(&spec, &page(PlayerOrder::Level, 0, 4)).await?;
    let levels: Vec<i32> = by_level.iter().map(|p| p.level).collect();
    assert_eq!(levels, vec![1, 2, 13, 27]);

    let by_id = repo.find_all(&spec, &page(PlayerOrder::Id, 0, 4)).await?;
    let ids: Vec<i64> = by_id.iter().map(|p| p.id).collect();
    let seeded_ids: Vec<i64> = seeded.iter().map(|p| p.id).collect();
    assert_eq!(ids, seeded_ids);

    drop(repo);
    uow.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn test_save_find_and_delete_on_postgres() -> Result<(), ApplicationError> {
    let Some(provider) = setup_db().await? else {
        return Ok(());
    };
    let uow = provider.begin().await?;
    let repo = uow.players();
    let title = unique_title();

    let player = player_factory(PlayerFactoryOptions {
        name: Some("Thorin"),
        title: Some(&title),
        race: Some(Race::Dwarf),
        profession: Some(Profession::Paladin),
        experience: Some(10_000),
        ..Default::default()
    });

    let saved = repo.save(&player).await?;
    assert!(saved.id > 0, "Store should assign an id");
    assert_eq!(
        saved,
        Player {
            id: saved.id,
            ..player.clone()
        }
    );
    assert!(repo.exists_by_id(saved.id).await?);
    assert_eq!(repo.find_by_id(saved.id).await?, Some(saved.clone()));

    let twin = repo.save(&player).await?;
    assert_ne!(twin.id, saved.id);

    let mut changed = saved.clone();
    changed.banned = true;
    changed.experience = 12_000;
    changed.refresh_progression();
    let updated = repo.save(&changed).await?;
    assert_eq!(updated, changed);
    assert_eq!(updated.level, 15);
    assert_eq!(repo.find_by_id(saved.id).await?, Some(changed));

    repo.delete_by_id(saved.id).await?;
    assert!(!repo.exists_by_id(saved.id).await?);
    assert_eq!(repo.find_by_id(saved.id).await?, None);
    assert_eq!(repo.count(&scoped(&title)).await?, 1);

    let gone = Player {
        id: saved.id,
        ..player
    };
    let err = repo.save(&gone).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    drop(repo);
    uow.rollback().await?;
    Ok(())
}
