//! Client-facing draft and character views.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::choices::ChoiceSelectionData;
use crate::enums::{Alignment, Background, Class, CreationStep, Language, Race, Skill};
use crate::rules::{BackgroundInfoData, ClassInfoData, RaceInfoData, SubraceInfoData};

/// Base ability scores; `0` marks an unassigned score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityScoresData {
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub dexterity: i32,
    #[serde(default)]
    pub constitution: i32,
    #[serde(default)]
    pub intelligence: i32,
    #[serde(default)]
    pub wisdom: i32,
    #[serde(default)]
    pub charisma: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationProgressData {
    pub steps_completed: u32,
    pub completion_percentage: u32,
    pub current_step: CreationStep,
}

/// A draft as rendered to the client.
///
/// The `*_info` fields are hydrated from rules data. They are `null` when the
/// draft has no id for them yet or when the caller did not hydrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDraftData {
    pub id: Uuid,
    pub player_id: String,
    pub session_id: Option<String>,
    pub name: String,
    pub race: Race,
    pub subrace_id: Option<String>,
    pub class: Class,
    pub background: Background,
    pub alignment: Alignment,
    pub ability_scores: Option<AbilityScoresData>,
    pub choices: Vec<ChoiceSelectionData>,
    pub progress: CreationProgressData,
    pub race_info: Option<RaceInfoData>,
    pub subrace_info: Option<SubraceInfoData>,
    pub class_info: Option<ClassInfoData>,
    pub background_info: Option<BackgroundInfoData>,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

/// A finalized character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterData {
    pub id: Uuid,
    pub player_id: String,
    pub session_id: Option<String>,
    pub name: String,
    pub race: Race,
    pub subrace_id: Option<String>,
    pub class: Class,
    pub background: Background,
    pub alignment: Alignment,
    /// Final scores, bonuses applied
    pub ability_scores: AbilityScoresData,
    pub level: u32,
    pub max_hit_points: i32,
    pub skill_proficiencies: Vec<Skill>,
    pub languages: Vec<Language>,
    pub equipment: Vec<String>,
    pub choices: Vec<ChoiceSelectionData>,
    pub created_at: String,
}
