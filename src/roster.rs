//! Built-in playable characters

use serde::Serialize;

use crate::error::GameError;
use crate::sim::CharacterProfile;

/// A selectable character
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Character {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub profile: CharacterProfile,
}

/// Everyone on the character-select screen, in display order
pub const ROSTER: [Character; 3] = [
    Character {
        id: "1",
        name: "Cookie Chocolate",
        emoji: "🍪",
        profile: CharacterProfile { speed: 5.0, jump_power: 15.0 },
    },
    Character {
        id: "2",
        name: "Cookie Strawberry",
        emoji: "🧁",
        profile: CharacterProfile { speed: 6.0, jump_power: 14.0 },
    },
    Character {
        id: "3",
        name: "Cookie Gold",
        emoji: "🥇",
        profile: CharacterProfile { speed: 7.0, jump_power: 13.0 },
    },
];

/// Look up a character by id
pub fn find(id: &str) -> Result<&'static Character, GameError> {
    ROSTER
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| GameError::UnknownCharacter(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known() {
        let c = find("2").unwrap();
        assert_eq!(c.name, "Cookie Strawberry");
        assert_eq!(c.profile.jump_power, 14.0);
        assert_eq!(c.profile.speed, 6.0);
    }

    #[test]
    fn test_find_unknown() {
        assert!(matches!(find("9"), Err(GameError::UnknownCharacter(id)) if id == "9"));
    }

    #[test]
    fn test_ids_unique() {
        for (i, a) in ROSTER.iter().enumerate() {
            for b in &ROSTER[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
