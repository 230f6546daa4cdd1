use chrono::Datelike;

use roster_types::errors::GameError;

use crate::models::player::{Player, PlayerPayload};

pub const MAX_NAME_LENGTH: usize = 12;
pub const MAX_TITLE_LENGTH: usize = 30;
pub const MAX_EXPERIENCE: i32 = 10_000_000;

/// Birthday years are counted from 1900 and must fall strictly inside
/// this range, i.e. calendar years 2001 to 2999.
const BIRTHDAY_YEAR_OFFSET: i32 = 1900;
const MIN_BIRTHDAY_OFFSET_YEAR: i32 = 100;
const MAX_BIRTHDAY_OFFSET_YEAR: i32 = 1100;

/// Returns true when name, title, race, birthday and profession are all set.
pub fn has_required_fields(payload: &PlayerPayload) -> bool {
    check_required_fields(payload).is_ok()
}

/// Returns true when every field of the player is within its allowed range.
pub fn is_valid(player: &Player) -> bool {
    check_values(player).is_ok()
}

/// Like [`has_required_fields`], reporting the first missing field.
pub fn check_required_fields(payload: &PlayerPayload) -> Result<(), GameError> {
    if payload.name.is_none() {
        return Err(GameError::MissingRequiredField("name"));
    }
    if payload.title.is_none() {
        return Err(GameError::MissingRequiredField("title"));
    }
    if payload.race.is_none() {
        return Err(GameError::MissingRequiredField("race"));
    }
    if payload.birthday.is_none() {
        return Err(GameError::MissingRequiredField("birthday"));
    }
    if payload.profession.is_none() {
        return Err(GameError::MissingRequiredField("profession"));
    }
    Ok(())
}

/// Like [`is_valid`], reporting the first field out of range.
pub fn check_values(player: &Player) -> Result<(), GameError> {
    let name_length = player.name.chars().count();
    if name_length == 0 || name_length > MAX_NAME_LENGTH {
        return Err(GameError::InvalidName(name_length));
    }

    let title_length = player.title.chars().count();
    if title_length > MAX_TITLE_LENGTH {
        return Err(GameError::InvalidTitle(title_length));
    }

    if player.experience <= 0 || player.experience > MAX_EXPERIENCE {
        return Err(GameError::InvalidExperience(player.experience));
    }

    let millis = player.birthday.timestamp_millis();
    let offset_year = player.birthday.year() - BIRTHDAY_YEAR_OFFSET;
    if millis <= 0
        || offset_year <= MIN_BIRTHDAY_OFFSET_YEAR
        || offset_year >= MAX_BIRTHDAY_OFFSET_YEAR
    {
        return Err(GameError::InvalidBirthday(millis));
    }

    Ok(())
}

/// Turns a create candidate into a new, unsaved player.
///
/// Runs the required-field check first, then the value check. An absent
/// experience counts as zero and is rejected by the value check; an absent
/// banned flag defaults to false. Progression is derived on the way out.
pub fn validate_new_player(payload: PlayerPayload) -> Result<Player, GameError> {
    let name = payload.name.ok_or(GameError::MissingRequiredField("name"))?;
    let title = payload.title.ok_or(GameError::MissingRequiredField("title"))?;
    let race = payload.race.ok_or(GameError::MissingRequiredField("race"))?;
    let birthday = payload
        .birthday
        .ok_or(GameError::MissingRequiredField("birthday"))?;
    let profession = payload
        .profession
        .ok_or(GameError::MissingRequiredField("profession"))?;

    let mut player = Player {
        id: 0,
        name,
        title,
        race,
        profession,
        experience: payload.experience.unwrap_or(0),
        level: 0,
        until_next_level: 0,
        birthday,
        banned: payload.banned.unwrap_or(false),
    };
    check_values(&player)?;
    player.refresh_progression();

    Ok(player)
}
