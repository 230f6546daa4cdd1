use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_types::player::{Profession, Race};

use crate::progression::{derive_level, derive_until_next_level};

/// A stored player.
///
/// `level` and `until_next_level` are always derived from `experience`
/// through [`Player::refresh_progression`], never taken from clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Assigned by the store on first save, `0` until then.
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
}

/// Client-submitted player data, used both as a create candidate and as a
/// sparse update patch. Absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerPayload {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub experience: Option<i32>,
    /// Accepted on the wire, never trusted.
    pub level: Option<i32>,
    /// Accepted on the wire, never trusted.
    pub until_next_level: Option<i32>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
}

impl Player {
    /// Recomputes level and experience until next level from experience.
    pub fn refresh_progression(&mut self) {
        self.level = derive_level(self.experience);
        self.until_next_level = derive_until_next_level(self.level, self.experience);
    }

    /// Overwrites every field that is present in `patch`.
    ///
    /// `id`, `level` and `until_next_level` are left alone: the latter two are
    /// recomputed by [`Player::refresh_progression`] before saving.
    pub fn apply_update(mut self, patch: &PlayerPayload) -> Player {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(race) = patch.race {
            self.race = race;
        }
        if let Some(profession) = patch.profession {
            self.profession = profession;
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = birthday;
        }
        if let Some(banned) = patch.banned {
            self.banned = banned;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        self
    }
}
