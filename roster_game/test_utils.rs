use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;

use roster_types::player::{Profession, Race};

use crate::models::player::{Player, PlayerPayload};

#[derive(Default, Clone)]
pub struct PlayerFactoryOptions<'a> {
    pub id: Option<i64>,
    pub name: Option<&'a str>,
    pub title: Option<&'a str>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub experience: Option<i32>,
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
}

/// Builds a valid player with derived progression. Unset options get
/// sensible defaults and a random short name.
pub fn player_factory(options: PlayerFactoryOptions) -> Player {
    let default_name: String = format!("p{}", rand::thread_rng().gen_range(0..1_000_000u32));

    let mut player = Player {
        id: options.id.unwrap_or(0),
        name: options.name.map_or(default_name, |s| s.to_string()),
        title: options.title.unwrap_or("Adventurer").to_string(),
        race: options.race.unwrap_or(Race::Human),
        profession: options.profession.unwrap_or(Profession::Warrior),
        experience: options.experience.unwrap_or(1_000),
        level: 0,
        until_next_level: 0,
        birthday: options
            .birthday
            .unwrap_or_else(|| Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap()),
        banned: options.banned.unwrap_or(false),
    };
    player.refresh_progression();
    player
}

/// Builds a complete, valid create payload from the same options.
pub fn payload_factory(options: PlayerFactoryOptions) -> PlayerPayload {
    let player = player_factory(options);

    PlayerPayload {
        name: Some(player.name),
        title: Some(player.title),
        race: Some(player.race),
        profession: Some(player.profession),
        experience: Some(player.experience),
        level: None,
        until_next_level: None,
        birthday: Some(player.birthday),
        banned: Some(player.banned),
    }
}
