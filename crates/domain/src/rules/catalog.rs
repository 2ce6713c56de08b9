//! Race, subrace, class and background definitions.

use serde::{Deserialize, Serialize};

use super::equipment::{EquipmentChoice, ItemReference};

/// A fixed ability-score increase granted by a race or subrace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityBonus {
    pub ability: String,
    pub bonus: i32,
}

impl AbilityBonus {
    pub fn new(ability: impl Into<String>, bonus: i32) -> Self {
        Self {
            ability: ability.into(),
            bonus,
        }
    }
}

/// "Choose N from this list" over plain identifiers (skills, languages, tools).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyChoice {
    pub choose: u32,
    #[serde(default)]
    pub options: Vec<String>,
}

impl ProficiencyChoice {
    pub fn new<I, S>(choose: u32, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choose,
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubraceInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonus>,
    #[serde(default)]
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonus>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub subraces: Vec<SubraceInfo>,
    #[serde(default)]
    pub language_choice: Option<ProficiencyChoice>,
    #[serde(default)]
    pub skill_choice: Option<ProficiencyChoice>,
}

impl RaceInfo {
    pub fn subrace(&self, subrace_id: &str) -> Option<&SubraceInfo> {
        self.subraces.iter().find(|s| s.id == subrace_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub hit_die: u32,
    #[serde(default)]
    pub primary_abilities: Vec<String>,
    #[serde(default)]
    pub saving_throws: Vec<String>,
    #[serde(default)]
    pub skill_choice: Option<ProficiencyChoice>,
    #[serde(default)]
    pub starting_equipment: Vec<ItemReference>,
    #[serde(default)]
    pub equipment_choices: Vec<EquipmentChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skill_proficiencies: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub feature: String,
    #[serde(default)]
    pub language_choice: Option<ProficiencyChoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_info_defaults_optional_sections() {
        let json = r#"{"id": "wizard", "name": "Wizard", "hit_die": 6}"#;
        let class: ClassInfo = serde_json::from_str(json).unwrap();
        assert!(class.skill_choice.is_none());
        assert!(class.equipment_choices.is_empty());
        assert_eq!(class.hit_die, 6);
    }

    #[test]
    fn race_finds_subrace_by_id() {
        let race = RaceInfo {
            id: "dwarf".into(),
            name: "Dwarf".into(),
            description: String::new(),
            speed: 25,
            size: "Medium".into(),
            ability_bonuses: vec![AbilityBonus::new("con", 2)],
            languages: vec!["common".into(), "dwarvish".into()],
            traits: vec![],
            subraces: vec![SubraceInfo {
                id: "hill-dwarf".into(),
                name: "Hill Dwarf".into(),
                description: String::new(),
                ability_bonuses: vec![AbilityBonus::new("wis", 1)],
                traits: vec![],
            }],
            language_choice: None,
            skill_choice: None,
        };

        assert_eq!(race.subrace("hill-dwarf").map(|s| s.name.as_str()), Some("Hill Dwarf"));
        assert!(race.subrace("mountain-dwarf").is_none());
    }
}
