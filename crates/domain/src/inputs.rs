//! Draft mutation inputs.
//!
//! The engine converts client requests into these records before a draft is
//! touched. Absent optional request fields arrive here as empty strings or
//! zero scores, never as missing values, so the aggregate only has one notion
//! of "not provided".

use crate::ids::DraftId;
use crate::value_objects::{AbilityScores, ChoiceSelection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDraftInput {
    pub player_id: String,
    /// Empty when the draft is not tied to a session
    pub session_id: String,
    /// Empty when the player has not named the character yet
    pub name: String,
    pub alignment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNameInput {
    pub draft_id: DraftId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAlignmentInput {
    pub draft_id: DraftId,
    pub alignment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRaceInput {
    pub draft_id: DraftId,
    pub race_id: String,
    pub subrace_id: String,
    pub choices: Vec<ChoiceSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateClassInput {
    pub draft_id: DraftId,
    pub class_id: String,
    pub choices: Vec<ChoiceSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBackgroundInput {
    pub draft_id: DraftId,
    pub background_id: String,
    pub choices: Vec<ChoiceSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAbilityScoresInput {
    pub draft_id: DraftId,
    /// Unassigned scores are zero
    pub ability_scores: AbilityScores,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSkillsInput {
    pub draft_id: DraftId,
    pub choices: Vec<ChoiceSelection>,
}
