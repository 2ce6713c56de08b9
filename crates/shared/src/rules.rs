//! Rules information views (hydrated race/class/background data).

use serde::{Deserialize, Serialize};

use crate::choices::{Choice, ItemReference};
use crate::enums::{Ability, Background, Class, Language, Race, Skill};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityBonusData {
    pub ability: Ability,
    pub bonus: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubraceInfoData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ability_bonuses: Vec<AbilityBonusData>,
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceInfoData {
    pub race: Race,
    pub name: String,
    pub description: String,
    pub speed: u32,
    pub size: String,
    pub ability_bonuses: Vec<AbilityBonusData>,
    pub languages: Vec<Language>,
    pub traits: Vec<String>,
    pub subraces: Vec<SubraceInfoData>,
    /// Language and skill choices granted by the race
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfoData {
    pub class: Class,
    pub name: String,
    pub description: String,
    pub hit_die: u32,
    pub primary_abilities: Vec<Ability>,
    pub saving_throws: Vec<Ability>,
    pub starting_equipment: Vec<ItemReference>,
    /// Skill choice first, then equipment choices in provider order
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundInfoData {
    pub background: Background,
    pub name: String,
    pub description: String,
    pub skill_proficiencies: Vec<Skill>,
    pub languages: Vec<Language>,
    pub feature: String,
    pub choices: Vec<Choice>,
}
