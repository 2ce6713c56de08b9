extern crate self as charforge_domain;

pub mod aggregates;
pub mod common;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod progress;
pub mod rules;
pub mod value_objects;

pub use aggregates::{Character, CharacterDraft, FinalizationRules};
pub use error::DomainError;
pub use ids::{CharacterId, DraftId};

pub use inputs::{
    CreateDraftInput, UpdateAbilityScoresInput, UpdateAlignmentInput, UpdateBackgroundInput,
    UpdateClassInput, UpdateNameInput, UpdateRaceInput, UpdateSkillsInput,
};

pub use progress::{
    CreationStep, Progress, ProgressTracker, ALL_STEPS_MASK, STEP_ABILITY_SCORES,
    STEP_BACKGROUND, STEP_CLASS, STEP_NAME, STEP_RACE, STEP_SKILLS,
};

pub use rules::{
    AbilityBonus, BackgroundInfo, ClassInfo, EquipmentCategoryRef, EquipmentChoice,
    EquipmentOption, EquipmentOptionItem, ItemReference, ProficiencyChoice, RaceInfo,
    SubraceInfo,
};

pub use value_objects::{
    ability_modifier, choice_source, choice_type, AbilityScoreChoice, AbilityScores,
    CharacterName, ChoiceSelection, PlayerId, SessionId, ABILITY_IDS,
};
