//! Client requests for draft operations.
//!
//! Optional fields mirror what a client may leave out. Choice lists are
//! `Option<Vec<Option<_>>>` because clients send `null` both for the whole
//! list and for individual entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::choices::ChoiceSelectionData;
use crate::draft::AbilityScoresData;
use crate::enums::{Alignment, Background, Class, Race};

/// Fields a client may set when the draft is created.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DraftSeedData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDraftRequest {
    pub player_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub initial_data: Option<DraftSeedData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDraftRequest {
    pub draft_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDraftsRequest {
    pub player_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDraftRequest {
    pub draft_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNameRequest {
    pub draft_id: Uuid,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAlignmentRequest {
    pub draft_id: Uuid,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRaceRequest {
    pub draft_id: Uuid,
    #[serde(default)]
    pub race: Race,
    #[serde(default)]
    pub subrace_id: Option<String>,
    #[serde(default)]
    pub race_choices: Option<Vec<Option<ChoiceSelectionData>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateClassRequest {
    pub draft_id: Uuid,
    #[serde(default)]
    pub class: Class,
    #[serde(default)]
    pub class_choices: Option<Vec<Option<ChoiceSelectionData>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBackgroundRequest {
    pub draft_id: Uuid,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub background_choices: Option<Vec<Option<ChoiceSelectionData>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAbilityScoresRequest {
    pub draft_id: Uuid,
    #[serde(default)]
    pub ability_scores: Option<AbilityScoresData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSkillsRequest {
    pub draft_id: Uuid,
    #[serde(default)]
    pub skill_choices: Option<Vec<Option<ChoiceSelectionData>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeDraftRequest {
    pub draft_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn null_entries_in_choice_lists_deserialize() {
        let json = format!(
            r#"{{"draft_id": "{}", "race": "ELF", "race_choices": [null, {{"choice_id": "elf_languages", "choice_type": "LANGUAGES", "source": "RACE", "selected_keys": ["sylvan"]}}]}}"#,
            Uuid::nil()
        );
        let request: UpdateRaceRequest = serde_json::from_str(&json).unwrap();
        let choices = request.race_choices.unwrap();
        assert_eq!(choices.len(), 2);
        assert!(choices[0].is_none());
        assert_eq!(request.race, Race::Elf);
    }

    #[test]
    fn create_request_without_seed() {
        let request: CreateDraftRequest =
            serde_json::from_str(r#"{"player_id": "player-1"}"#).unwrap();
        assert!(request.session_id.is_none());
        assert!(request.initial_data.is_none());
    }
}
