use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PlayerClass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerClass {
    DeathKnight,
    DemonHunter,
    Druid,
    Hunter,
    Mage,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
    Neutral,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; 12] = [
        PlayerClass::DeathKnight,
        PlayerClass::DemonHunter,
        PlayerClass::Druid,
        PlayerClass::Hunter,
        PlayerClass::Mage,
        PlayerClass::Paladin,
        PlayerClass::Priest,
        PlayerClass::Rogue,
        PlayerClass::Shaman,
        PlayerClass::Warlock,
        PlayerClass::Warrior,
        PlayerClass::Neutral,
    ];

    /// Upper-case API name, as used for the keys of the class series.
    pub fn api_name(&self) -> &'static str {
        match self {
            PlayerClass::DeathKnight => "DEATHKNIGHT",
            PlayerClass::DemonHunter => "DEMONHUNTER",
            PlayerClass::Druid => "DRUID",
            PlayerClass::Hunter => "HUNTER",
            PlayerClass::Mage => "MAGE",
            PlayerClass::Paladin => "PALADIN",
            PlayerClass::Priest => "PRIEST",
            PlayerClass::Rogue => "ROGUE",
            PlayerClass::Shaman => "SHAMAN",
            PlayerClass::Warlock => "WARLOCK",
            PlayerClass::Warrior => "WARRIOR",
            PlayerClass::Neutral => "NEUTRAL",
        }
    }

    /// Parse an API class name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.api_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerClass::DeathKnight => "Death Knight",
            PlayerClass::DemonHunter => "Demon Hunter",
            PlayerClass::Druid => "Druid",
            PlayerClass::Hunter => "Hunter",
            PlayerClass::Mage => "Mage",
            PlayerClass::Paladin => "Paladin",
            PlayerClass::Priest => "Priest",
            PlayerClass::Rogue => "Rogue",
            PlayerClass::Shaman => "Shaman",
            PlayerClass::Warlock => "Warlock",
            PlayerClass::Warrior => "Warrior",
            PlayerClass::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureCore {
    pub as_of: String,
    pub format: i64,
    #[serde(default)]
    pub components: Vec<i64>,
}

/// A named deck strategy belonging to one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub player_class: i64,
    #[serde(default)]
    pub player_class_name: String,
    /// Site-relative deep link, e.g. `/archetypes/123/face-hunter`.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub standard_ccp_signature_core: Option<SignatureCore>,
}

impl Archetype {
    pub fn class(&self) -> Option<PlayerClass> {
        PlayerClass::from_name(&self.player_class_name)
    }
}
