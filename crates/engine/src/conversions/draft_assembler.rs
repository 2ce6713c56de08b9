//! Draft request/view assembly.
//!
//! Requests become domain inputs with absent fields defaulted to empty or
//! zero values. Stored drafts become client views; rules info is rendered
//! only when the caller supplied it, otherwise the field stays `null`.

use charforge_domain::{
    choice_source, AbilityScores, BackgroundInfo, Character, CharacterDraft, ChoiceSelection,
    ClassInfo, CreateDraftInput, CreationStep, DraftId, Progress, RaceInfo, SubraceInfo,
    UpdateAbilityScoresInput, UpdateAlignmentInput, UpdateBackgroundInput, UpdateClassInput,
    UpdateNameInput, UpdateRaceInput, UpdateSkillsInput,
};
use charforge_shared::draft::{
    AbilityScoresData, CharacterData, CharacterDraftData, CreationProgressData,
};
use charforge_shared::enums::{
    Ability, Alignment, Background, Class, CreationStep as WireCreationStep, Language, Race,
    Skill,
};
use charforge_shared::requests::{
    CreateDraftRequest, UpdateAbilityScoresRequest, UpdateAlignmentRequest,
    UpdateBackgroundRequest, UpdateClassRequest, UpdateNameRequest, UpdateRaceRequest,
    UpdateSkillsRequest,
};
use charforge_shared::rules::{
    AbilityBonusData, BackgroundInfoData, ClassInfoData, RaceInfoData, SubraceInfoData,
};
use charforge_shared::ItemReference;

use super::choice_resolver::{
    selection_to_wire, selections_to_domain, ChoiceResolutionError, ChoiceResolver,
};
use super::enum_mapper::{wire_values, DomainIdMapping};

/// Rules info to render alongside a draft. Absent entries render as `null`.
#[derive(Debug, Clone, Default)]
pub struct DraftHydration {
    pub race: Option<RaceInfo>,
    pub subrace: Option<SubraceInfo>,
    pub class: Option<ClassInfo>,
    pub background: Option<BackgroundInfo>,
}

// =============================================================================
// Requests -> domain inputs
// =============================================================================

pub fn create_input(request: CreateDraftRequest) -> CreateDraftInput {
    let seed = request.initial_data.unwrap_or_default();
    CreateDraftInput {
        player_id: request.player_id,
        session_id: request.session_id.unwrap_or_default(),
        name: seed.name.unwrap_or_default(),
        alignment: seed.alignment.to_domain_id().to_string(),
    }
}

pub fn update_name_input(request: UpdateNameRequest) -> UpdateNameInput {
    UpdateNameInput {
        draft_id: DraftId::from_uuid(request.draft_id),
        name: request.name,
    }
}

pub fn update_alignment_input(request: UpdateAlignmentRequest) -> UpdateAlignmentInput {
    UpdateAlignmentInput {
        draft_id: DraftId::from_uuid(request.draft_id),
        alignment: request.alignment.to_domain_id().to_string(),
    }
}

pub fn update_race_input(request: UpdateRaceRequest) -> UpdateRaceInput {
    UpdateRaceInput {
        draft_id: DraftId::from_uuid(request.draft_id),
        race_id: request.race.to_domain_id().to_string(),
        subrace_id: request.subrace_id.unwrap_or_default(),
        choices: default_source(selections_to_domain(request.race_choices), choice_source::RACE),
    }
}

pub fn update_class_input(request: UpdateClassRequest) -> UpdateClassInput {
    UpdateClassInput {
        draft_id: DraftId::from_uuid(request.draft_id),
        class_id: request.class.to_domain_id().to_string(),
        choices: default_source(
            selections_to_domain(request.class_choices),
            choice_source::CLASS,
        ),
    }
}

pub fn update_background_input(request: UpdateBackgroundRequest) -> UpdateBackgroundInput {
    UpdateBackgroundInput {
        draft_id: DraftId::from_uuid(request.draft_id),
        background_id: request.background.to_domain_id().to_string(),
        choices: default_source(
            selections_to_domain(request.background_choices),
            choice_source::BACKGROUND,
        ),
    }
}

pub fn update_ability_scores_input(request: UpdateAbilityScoresRequest) -> UpdateAbilityScoresInput {
    let raw = request.ability_scores.unwrap_or_default();
    UpdateAbilityScoresInput {
        draft_id: DraftId::from_uuid(request.draft_id),
        ability_scores: AbilityScores::from_raw(
            raw.strength,
            raw.dexterity,
            raw.constitution,
            raw.intelligence,
            raw.wisdom,
            raw.charisma,
        ),
    }
}

pub fn update_skills_input(request: UpdateSkillsRequest) -> UpdateSkillsInput {
    UpdateSkillsInput {
        draft_id: DraftId::from_uuid(request.draft_id),
        choices: selections_to_domain(request.skill_choices),
    }
}

/// Selections submitted with a step belong to that step unless they say otherwise.
fn default_source(mut choices: Vec<ChoiceSelection>, source: &str) -> Vec<ChoiceSelection> {
    for choice in choices.iter_mut().filter(|c| c.source.is_empty()) {
        choice.source = source.to_string();
    }
    choices
}

// =============================================================================
// Domain -> views
// =============================================================================

pub fn progress_view(progress: Progress) -> CreationProgressData {
    CreationProgressData {
        steps_completed: progress.steps_completed(),
        completion_percentage: progress.completion_percentage(),
        current_step: creation_step_to_wire(progress.current_step()),
    }
}

pub fn creation_step_to_wire(step: CreationStep) -> WireCreationStep {
    match step {
        CreationStep::Name => WireCreationStep::Name,
        CreationStep::Race => WireCreationStep::Race,
        CreationStep::Class => WireCreationStep::Class,
        CreationStep::Background => WireCreationStep::Background,
        CreationStep::AbilityScores => WireCreationStep::AbilityScores,
        CreationStep::Skills => WireCreationStep::Skills,
        CreationStep::Review => WireCreationStep::Review,
    }
}

pub fn ability_scores_view(scores: &AbilityScores) -> AbilityScoresData {
    AbilityScoresData {
        strength: scores.strength(),
        dexterity: scores.dexterity(),
        constitution: scores.constitution(),
        intelligence: scores.intelligence(),
        wisdom: scores.wisdom(),
        charisma: scores.charisma(),
    }
}

pub fn subrace_info_view(subrace: &SubraceInfo) -> SubraceInfoData {
    SubraceInfoData {
        id: subrace.id.clone(),
        name: subrace.name.clone(),
        description: subrace.description.clone(),
        ability_bonuses: subrace
            .ability_bonuses
            .iter()
            .map(|b| AbilityBonusData {
                ability: Ability::from_domain_id(&b.ability),
                bonus: b.bonus,
            })
            .collect(),
        traits: subrace.traits.clone(),
    }
}

/// Renders drafts, characters and rules info.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftAssembler {
    resolver: ChoiceResolver,
}

impl DraftAssembler {
    pub fn new(resolver: ChoiceResolver) -> Self {
        Self { resolver }
    }

    /// Render a draft. Progress is derived from the draft, never stored.
    pub fn draft_view(
        &self,
        draft: &CharacterDraft,
        hydration: &DraftHydration,
    ) -> Result<CharacterDraftData, ChoiceResolutionError> {
        let class_info = hydration
            .class
            .as_ref()
            .map(|class| self.class_info_view(class))
            .transpose()?;

        Ok(CharacterDraftData {
            id: draft.id().to_uuid(),
            player_id: draft.player_id().to_string(),
            session_id: draft.session_id().map(ToString::to_string),
            name: draft.name().map(|n| n.to_string()).unwrap_or_default(),
            race: Race::from_domain_id(draft.race_id()),
            subrace_id: draft.subrace_id().map(str::to_string),
            class: Class::from_domain_id(draft.class_id()),
            background: Background::from_domain_id(draft.background_id()),
            alignment: Alignment::from_domain_id(draft.alignment()),
            ability_scores: draft.ability_scores().map(ability_scores_view),
            choices: draft.choices().iter().map(selection_to_wire).collect(),
            progress: progress_view(draft.progress()),
            race_info: hydration.race.as_ref().map(|r| self.race_info_view(r)),
            subrace_info: hydration.subrace.as_ref().map(subrace_info_view),
            class_info,
            background_info: hydration
                .background
                .as_ref()
                .map(|b| self.background_info_view(b)),
            created_at: draft.created_at().to_rfc3339(),
            updated_at: draft.updated_at().to_rfc3339(),
        })
    }

    pub fn race_info_view(&self, race: &RaceInfo) -> RaceInfoData {
        RaceInfoData {
            race: Race::from_domain_id(&race.id),
            name: race.name.clone(),
            description: race.description.clone(),
            speed: race.speed,
            size: race.size.clone(),
            ability_bonuses: race
                .ability_bonuses
                .iter()
                .map(|b| AbilityBonusData {
                    ability: Ability::from_domain_id(&b.ability),
                    bonus: b.bonus,
                })
                .collect(),
            languages: wire_values::<Language>(&race.languages),
            traits: race.traits.clone(),
            subraces: race.subraces.iter().map(subrace_info_view).collect(),
            choices: self.resolver.race_choices(race),
        }
    }

    pub fn class_info_view(&self, class: &ClassInfo) -> Result<ClassInfoData, ChoiceResolutionError> {
        Ok(ClassInfoData {
            class: Class::from_domain_id(&class.id),
            name: class.name.clone(),
            description: class.description.clone(),
            hit_die: class.hit_die,
            primary_abilities: wire_values::<Ability>(&class.primary_abilities),
            saving_throws: wire_values::<Ability>(&class.saving_throws),
            starting_equipment: class
                .starting_equipment
                .iter()
                .map(|item| ItemReference {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                })
                .collect(),
            choices: self.resolver.class_choices(class)?,
        })
    }

    pub fn background_info_view(&self, background: &BackgroundInfo) -> BackgroundInfoData {
        BackgroundInfoData {
            background: Background::from_domain_id(&background.id),
            name: background.name.clone(),
            description: background.description.clone(),
            skill_proficiencies: wire_values::<Skill>(&background.skill_proficiencies),
            languages: wire_values::<Language>(&background.languages),
            feature: background.feature.clone(),
            choices: self.resolver.background_choices(background),
        }
    }

    pub fn character_view(&self, character: &Character) -> CharacterData {
        CharacterData {
            id: character.id().to_uuid(),
            player_id: character.player_id().to_string(),
            session_id: character.session_id().map(ToString::to_string),
            name: character.name().to_string(),
            race: Race::from_domain_id(character.race_id()),
            subrace_id: character.subrace_id().map(str::to_string),
            class: Class::from_domain_id(character.class_id()),
            background: Background::from_domain_id(character.background_id()),
            alignment: Alignment::from_domain_id(character.alignment()),
            ability_scores: ability_scores_view(character.ability_scores()),
            level: u32::from(character.level()),
            max_hit_points: character.max_hit_points(),
            skill_proficiencies: wire_values::<Skill>(character.skill_proficiencies()),
            languages: wire_values::<Language>(character.languages()),
            equipment: character.equipment().to_vec(),
            choices: character.choices().iter().map(selection_to_wire).collect(),
            created_at: character.created_at().to_rfc3339(),
        }
    }
}
