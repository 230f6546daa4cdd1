use roster_game::models::player::Player;
use roster_types::player::{Profession, Race};

use crate::models::{self as db_models};

impl From<Race> for db_models::Race {
    fn from(race: Race) -> Self {
        match race {
            Race::Human => db_models::Race::Human,
            Race::Dwarf => db_models::Race::Dwarf,
            Race::Elf => db_models::Race::Elf,
            Race::Giant => db_models::Race::Giant,
            Race::Orc => db_models::Race::Orc,
            Race::Troll => db_models::Race::Troll,
            Race::Hobbit => db_models::Race::Hobbit,
        }
    }
}

impl From<db_models::Race> for Race {
    fn from(race: db_models::Race) -> Self {
        match race {
            db_models::Race::Human => Race::Human,
            db_models::Race::Dwarf => Race::Dwarf,
            db_models::Race::Elf => Race::Elf,
            db_models::Race::Giant => Race::Giant,
            db_models::Race::Orc => Race::Orc,
            db_models::Race::Troll => Race::Troll,
            db_models::Race::Hobbit => Race::Hobbit,
        }
    }
}

impl From<Profession> for db_models::Profession {
    fn from(profession: Profession) -> Self {
        match profession {
            Profession::Warrior => db_models::Profession::Warrior,
            Profession::Rogue => db_models::Profession::Rogue,
            Profession::Sorcerer => db_models::Profession::Sorcerer,
            Profession::Cleric => db_models::Profession::Cleric,
            Profession::Paladin => db_models::Profession::Paladin,
            Profession::Nazgul => db_models::Profession::Nazgul,
            Profession::Warlock => db_models::Profession::Warlock,
            Profession::Druid => db_models::Profession::Druid,
        }
    }
}

impl From<db_models::Profession> for Profession {
    fn from(profession: db_models::Profession) -> Self {
        match profession {
            db_models::Profession::Warrior => Profession::Warrior,
            db_models::Profession::Rogue => Profession::Rogue,
            db_models::Profession::Sorcerer => Profession::Sorcerer,
            db_models::Profession::Cleric => Profession::Cleric,
            db_models::Profession::Paladin => Profession::Paladin,
            db_models::Profession::Nazgul => Profession::Nazgul,
            db_models::Profession::Warlock => Profession::Warlock,
            db_models::Profession::Druid => Profession::Druid,
        }
    }
}

impl From<db_models::Player> for Player {
    fn from(player: db_models::Player) -> Self {
        Player {
            id: player.id,
            name: player.name,
            title: player.title,
            race: player.race.into(),
            profession: player.profession.into(),
            experience: player.experience,
            level: player.level,
            until_next_level: player.until_next_level,
            birthday: player.birthday,
            banned: player.banned,
        }
    }
}
