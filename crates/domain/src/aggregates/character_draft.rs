//! CharacterDraft aggregate - a character still under construction
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `CharacterName`, `PlayerId`, `SessionId` are validated on construction
//! - **Derived progress**: `progress()` is recomputed from the fields on every call
//! - **Monotonic updates**: mutations reject empty values, so a successful
//!   update can only complete steps, never undo them

use chrono::{DateTime, Utc};

use crate::common::StringExt;
use crate::error::DomainError;
use crate::ids::DraftId;
use crate::inputs::{
    CreateDraftInput, UpdateAbilityScoresInput, UpdateAlignmentInput, UpdateBackgroundInput,
    UpdateClassInput, UpdateNameInput, UpdateRaceInput, UpdateSkillsInput,
};
use crate::progress::{Progress, ProgressTracker};
use crate::value_objects::{
    choice_source, choice_type, AbilityScores, CharacterName, ChoiceSelection, PlayerId,
    SessionId,
};

/// A mutable, in-progress character.
///
/// # Invariants
///
/// - `name`, when set, is non-empty and <= 100 characters (enforced by `CharacterName`)
/// - `choices` holds at most one selection per `choice_id`
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterDraft {
    // Identity
    id: DraftId,
    player_id: PlayerId,
    session_id: Option<SessionId>,

    // Creative fields
    name: Option<CharacterName>,
    race_id: String,
    subrace_id: Option<String>,
    class_id: String,
    background_id: String,
    alignment: String,
    ability_scores: Option<AbilityScores>,
    choices: Vec<ChoiceSelection>,

    // Metadata
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CharacterDraft {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty draft owned by `player_id`.
    pub fn new(
        id: DraftId,
        player_id: PlayerId,
        session_id: Option<SessionId>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            player_id,
            session_id,
            name: None,
            race_id: String::new(),
            subrace_id: None,
            class_id: String::new(),
            background_id: String::new(),
            alignment: String::new(),
            ability_scores: None,
            choices: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a draft from a create request's domain input.
    ///
    /// # Errors
    ///
    /// Returns an error if the player id is empty, or if a seed name is given
    /// but invalid.
    pub fn create(
        id: DraftId,
        input: CreateDraftInput,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let player_id = PlayerId::new(input.player_id)?;
        let session_id = input
            .session_id
            .into_option()
            .map(SessionId::new)
            .transpose()?;

        let mut draft = Self::new(id, player_id, session_id, now);
        if let Some(name) = input.name.into_option() {
            draft.name = Some(CharacterName::new(name)?);
        }
        draft.alignment = input.alignment;
        Ok(draft)
    }

    // =========================================================================
    // Builder Methods (reconstitution from storage)
    // =========================================================================

    pub fn with_name(mut self, name: CharacterName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_race(mut self, race_id: impl Into<String>, subrace_id: Option<String>) -> Self {
        self.race_id = race_id.into();
        self.subrace_id = subrace_id;
        self
    }

    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = class_id.into();
        self
    }

    pub fn with_background(mut self, background_id: impl Into<String>) -> Self {
        self.background_id = background_id.into();
        self
    }

    pub fn with_ability_scores(mut self, scores: AbilityScores) -> Self {
        self.ability_scores = Some(scores);
        self
    }

    pub fn with_choices(mut self, choices: Vec<ChoiceSelection>) -> Self {
        self.choices = choices;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> DraftId {
        self.id
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn name(&self) -> Option<&CharacterName> {
        self.name.as_ref()
    }

    pub fn race_id(&self) -> &str {
        &self.race_id
    }

    pub fn subrace_id(&self) -> Option<&str> {
        self.subrace_id.as_deref()
    }

    pub fn class_id(&self) -> &str {
        &self.class_id
    }

    pub fn background_id(&self) -> &str {
        &self.background_id
    }

    pub fn alignment(&self) -> &str {
        &self.alignment
    }

    pub fn ability_scores(&self) -> Option<&AbilityScores> {
        self.ability_scores.as_ref()
    }

    pub fn choices(&self) -> &[ChoiceSelection] {
        &self.choices
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Creation progress derived from the current fields.
    pub fn progress(&self) -> Progress {
        ProgressTracker::track(self)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn update_name(
        &mut self,
        input: UpdateNameInput,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.name = Some(CharacterName::new(input.name)?);
        self.touch(now);
        Ok(())
    }

    /// Alignment is not a creation step; it may be set or cleared freely.
    pub fn update_alignment(&mut self, input: UpdateAlignmentInput, now: DateTime<Utc>) {
        self.alignment = input.alignment;
        self.touch(now);
    }

    /// Set the race and replace every race- and subrace-sourced selection.
    pub fn update_race(
        &mut self,
        input: UpdateRaceInput,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if input.race_id.is_empty() {
            return Err(DomainError::validation("Race is required"));
        }
        self.race_id = input.race_id;
        self.subrace_id = input.subrace_id.into_option();
        self.choices.retain(|c| {
            !c.is_from(choice_source::RACE) && !c.is_from(choice_source::SUBRACE)
        });
        self.upsert_choices(input.choices);
        self.touch(now);
        Ok(())
    }

    /// Set the class and replace class-sourced selections.
    ///
    /// Skill picks are owned by the skills step and survive a class change.
    pub fn update_class(
        &mut self,
        input: UpdateClassInput,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if input.class_id.is_empty() {
            return Err(DomainError::validation("Class is required"));
        }
        self.class_id = input.class_id;
        self.choices
            .retain(|c| !c.is_from(choice_source::CLASS) || c.is_type(choice_type::SKILL));
        self.upsert_choices(input.choices);
        self.touch(now);
        Ok(())
    }

    pub fn update_background(
        &mut self,
        input: UpdateBackgroundInput,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if input.background_id.is_empty() {
            return Err(DomainError::validation("Background is required"));
        }
        self.background_id = input.background_id;
        self.choices.retain(|c| !c.is_from(choice_source::BACKGROUND));
        self.upsert_choices(input.choices);
        self.touch(now);
        Ok(())
    }

    pub fn update_ability_scores(
        &mut self,
        input: UpdateAbilityScoresInput,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let raw = input.ability_scores;
        let scores = AbilityScores::new(
            raw.strength(),
            raw.dexterity(),
            raw.constitution(),
            raw.intelligence(),
            raw.wisdom(),
            raw.charisma(),
        )?;
        self.ability_scores = Some(scores);
        self.touch(now);
        Ok(())
    }

    /// Replace the skills-step picks. Skill picks granted by race, subrace or
    /// background belong to those steps and are kept.
    ///
    /// Selections with no type are treated as skill picks and selections with
    /// no source as class picks.
    pub fn update_skills(
        &mut self,
        input: UpdateSkillsInput,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let skills: Vec<ChoiceSelection> = input
            .choices
            .into_iter()
            .map(|mut choice| {
                if choice.choice_type.is_empty() {
                    choice.choice_type = choice_type::SKILL.to_string();
                }
                if choice.source.is_empty() {
                    choice.source = choice_source::CLASS.to_string();
                }
                choice
            })
            .collect();

        if !skills.iter().any(ChoiceSelection::completes_skills_step) {
            return Err(DomainError::validation("At least one skill must be selected"));
        }

        self.choices.retain(|c| !c.is_skills_step_pick());
        self.upsert_choices(skills);
        self.touch(now);
        Ok(())
    }

    /// Insert or replace by `choice_id`. A completed skills-step pick is only
    /// ever replaced by another completed one.
    fn upsert_choices(&mut self, incoming: Vec<ChoiceSelection>) {
        for choice in incoming {
            let guarded = self
                .choices
                .iter()
                .any(|c| c.choice_id == choice.choice_id && c.completes_skills_step());
            if guarded && !choice.completes_skills_step() {
                continue;
            }
            self.choices.retain(|existing| existing.choice_id != choice.choice_id);
            self.choices.push(choice);
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
