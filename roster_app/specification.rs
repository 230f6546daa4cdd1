use roster_game::models::player::Player;
use roster_types::{
    Result,
    player::{Profession, Race},
};

use crate::params::{Params, parse_bool, parse_param};

/// A single condition on a player. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerFilter {
    /// Case-sensitive substring match.
    NameContains(String),
    /// Case-sensitive substring match.
    TitleContains(String),
    RaceIs(Race),
    ProfessionIs(Profession),
    /// Birthday at or after the given epoch milliseconds.
    BornAfter(i64),
    /// Birthday at or before the given epoch milliseconds.
    BornBefore(i64),
    BannedIs(bool),
    MinExperience(i32),
    MaxExperience(i32),
    MinLevel(i32),
    MaxLevel(i32),
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            PlayerFilter::NameContains(needle) => player.name.contains(needle.as_str()),
            PlayerFilter::TitleContains(needle) => player.title.contains(needle.as_str()),
            PlayerFilter::RaceIs(race) => player.race == *race,
            PlayerFilter::ProfessionIs(profession) => player.profession == *profession,
            PlayerFilter::BornAfter(millis) => player.birthday.timestamp_millis() >= *millis,
            PlayerFilter::BornBefore(millis) => player.birthday.timestamp_millis() <= *millis,
            PlayerFilter::BannedIs(banned) => player.banned == *banned,
            PlayerFilter::MinExperience(min) => player.experience >= *min,
            PlayerFilter::MaxExperience(max) => player.experience <= *max,
            PlayerFilter::MinLevel(min) => player.level >= *min,
            PlayerFilter::MaxLevel(max) => player.level <= *max,
        }
    }
}

/// Conjunction of [`PlayerFilter`]s. The empty spec matches every player.
///
/// It is a plain value: the same spec is handed to the store for both the
/// count and the page fetch of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSpec {
    filters: Vec<PlayerFilter>,
}

impl PlayerSpec {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: PlayerFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(&self) -> &[PlayerFilter] {
        &self.filters
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.filters.iter().all(|filter| filter.matches(player))
    }
}

/// Builds the [`PlayerSpec`] for a request from its query parameters.
///
/// Unknown keys are ignored. A recognised key whose value does not parse is
/// a malformed request.
pub fn build_player_spec(params: &Params) -> Result<PlayerSpec> {
    let mut spec = PlayerSpec::all();

    if let Some(name) = params.get("name") {
        spec = spec.and(PlayerFilter::NameContains(name.clone()));
    }
    if let Some(title) = params.get("title") {
        spec = spec.and(PlayerFilter::TitleContains(title.clone()));
    }
    if let Some(race) = parse_param::<Race>(params, "race")? {
        spec = spec.and(PlayerFilter::RaceIs(race));
    }
    if let Some(profession) = parse_param::<Profession>(params, "profession")? {
        spec = spec.and(PlayerFilter::ProfessionIs(profession));
    }
    if let Some(after) = parse_param::<i64>(params, "after")? {
        spec = spec.and(PlayerFilter::BornAfter(after));
    }
    if let Some(before) = parse_param::<i64>(params, "before")? {
        spec = spec.and(PlayerFilter::BornBefore(before));
    }
    if let Some(banned) = params
        .get("banned")
        .map(|value| parse_bool("banned", value))
        .transpose()?
    {
        spec = spec.and(PlayerFilter::BannedIs(banned));
    }
    if let Some(min) = parse_param::<i32>(params, "minExperience")? {
        spec = spec.and(PlayerFilter::MinExperience(min));
    }
    if let Some(max) = parse_param::<i32>(params, "maxExperience")? {
        spec = spec.and(PlayerFilter::MaxExperience(max));
    }
    if let Some(min) = parse_param::<i32>(params, "minLevel")? {
        spec = spec.and(PlayerFilter::MinLevel(min));
    }
    if let Some(max) = parse_param::<i32>(params, "maxLevel")? {
        spec = spec.and(PlayerFilter::MaxLevel(max));
    }

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use roster_game::test_utils::{PlayerFactoryOptions, player_factory};
    use roster_types::errors::{AppError, ApplicationError, ErrorKind};

    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn roster() -> Vec<Player> {
        [50, 150, 400, 1_600, 1_500, 1_999, 2_100, 25_000]
            .into_iter()
            .enumerate()
            .map(|(idx, experience)| {
                player_factory(PlayerFactoryOptions {
                    id: Some(idx as i64 + 1),
                    experience: Some(experience),
                    ..Default::default()
                })
            })
            .collect()
    }

    #[test]
    fn test_empty_params_match_everything() {
        let spec = build_player_spec(&Params::new()).unwrap();
        assert!(spec.filters().is_empty());
        assert!(roster().iter().all(|p| spec.matches(p)));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let spec = build_player_spec(&params(&[
            ("order", "LEVEL"),
            ("pageSize", "5"),
            ("color", "blue"),
        ]))
        .unwrap();
        assert_eq!(spec, PlayerSpec::all());
    }

    #[test]
    fn test_level_window_matches_exact_level() {
        let spec = build_player_spec(&params(&[("minLevel", "5"), ("maxLevel", "5")])).unwrap();

        let matched: Vec<i32> = roster()
            .into_iter()
            .filter(|p| spec.matches(p))
            .map(|p| p.level)
            .collect();

        // 1_500, 1_600 and 1_999 XP are level 5; 2_100 is level 6
        assert_eq!(matched, vec![5, 5, 5]);
    }

    #[test]
    fn test_experience_bounds_are_inclusive() {
        let spec = build_player_spec(&params(&[
            ("minExperience", "400"),
            ("maxExperience", "1600"),
        ]))
        .unwrap();

        let matched: Vec<i32> = roster()
            .into_iter()
            .filter(|p| spec.matches(p))
            .map(|p| p.experience)
            .collect();
        assert_eq!(matched, vec![400, 1_600, 1_500]);
    }

    #[test]
    fn test_name_and_title_are_case_sensitive_substrings() {
        let player = player_factory(PlayerFactoryOptions {
            name: Some("Legolas"),
            title: Some("Prince of Mirkwood"),
            ..Default::default()
        });

        let spec = build_player_spec(&params(&[("name", "gol"), ("title", "Mirk")])).unwrap();
        assert!(spec.matches(&player));

        let spec = build_player_spec(&params(&[("name", "GOL")])).unwrap();
        assert!(!spec.matches(&player));
    }

    #[test]
    fn test_race_profession_and_banned() {
        let player = player_factory(PlayerFactoryOptions {
            race: Some(Race::Elf),
            profession: Some(Profession::Druid),
            banned: Some(true),
            ..Default::default()
        });

        let spec = build_player_spec(&params(&[
            ("race", "ELF"),
            ("profession", "DRUID"),
            ("banned", "true"),
        ]))
        .unwrap();
        assert_eq!(spec.filters().len(), 3);
        assert!(spec.matches(&player));

        let spec = build_player_spec(&params(&[("banned", "false")])).unwrap();
        assert!(!spec.matches(&player));

        let spec = build_player_spec(&params(&[("race", "ORC")])).unwrap();
        assert!(!spec.matches(&player));
    }

    #[test]
    fn test_birthday_window_is_inclusive() {
        let birthday = Utc.with_ymd_and_hms(2012, 5, 5, 10, 0, 0).unwrap();
        let millis = birthday.timestamp_millis();
        let player = player_factory(PlayerFactoryOptions {
            birthday: Some(birthday),
            ..Default::default()
        });

        let exact = millis.to_string();
        let spec = build_player_spec(&params(&[("after", &exact), ("before", &exact)])).unwrap();
        assert!(spec.matches(&player));

        let later = (millis + 1).to_string();
        let spec = build_player_spec(&params(&[("after", &later)])).unwrap();
        assert!(!spec.matches(&player));

        let earlier = (millis - 1).to_string();
        let spec = build_player_spec(&params(&[("before", &earlier)])).unwrap();
        assert!(!spec.matches(&player));
    }

    #[test]
    fn test_unparseable_values_are_malformed_requests() {
        for (key, value) in [
            ("race", "elf"),
            ("profession", "BARD"),
            ("after", "yesterday"),
            ("before", "1.5"),
            ("banned", "maybe"),
            ("minExperience", "lots"),
            ("maxExperience", "99999999999"),
            ("minLevel", ""),
            ("maxLevel", "five"),
        ] {
            let err = build_player_spec(&params(&[(key, value)])).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedRequest, "{key}={value}");
            match err {
                ApplicationError::App(AppError::InvalidParam { key: k, value: v }) => {
                    assert_eq!(k, key);
                    assert_eq!(v, value);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
