//! Character aggregate - the immutable result of finalizing a draft

use chrono::{DateTime, Utc};

use crate::aggregates::CharacterDraft;
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::progress::CreationStep;
use crate::rules::{BackgroundInfo, ClassInfo, RaceInfo};
use crate::value_objects::{
    ability_modifier, choice_type, AbilityScores, CharacterName, ChoiceSelection, PlayerId,
    SessionId,
};

/// Rules data needed to turn a draft into a character.
#[derive(Debug, Clone, Copy)]
pub struct FinalizationRules<'a> {
    pub race: &'a RaceInfo,
    pub class: &'a ClassInfo,
    pub background: &'a BackgroundInfo,
}

/// A finalized character. There are no mutators.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    id: CharacterId,
    player_id: PlayerId,
    session_id: Option<SessionId>,
    name: CharacterName,
    race_id: String,
    subrace_id: Option<String>,
    class_id: String,
    background_id: String,
    alignment: String,
    ability_scores: AbilityScores,
    level: u8,
    max_hit_points: i32,
    skill_proficiencies: Vec<String>,
    languages: Vec<String>,
    equipment: Vec<String>,
    choices: Vec<ChoiceSelection>,
    created_at: DateTime<Utc>,
}

impl Character {
    /// Finalize a complete draft.
    ///
    /// Final ability scores are the draft's base scores plus race, subrace and
    /// chosen ability-score bonuses, clamped to 1..=30. Max hit points at level 1 are the class
    /// hit die plus the constitution modifier, never below 1.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` if the draft has not
    /// reached the review step.
    pub fn from_draft(
        id: CharacterId,
        draft: &CharacterDraft,
        rules: FinalizationRules<'_>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let progress = draft.progress();
        if progress.current_step() != CreationStep::Review {
            return Err(DomainError::invalid_state_transition(format!(
                "Draft {} is not ready to finalize; next step is {}",
                draft.id(),
                progress.current_step()
            )));
        }

        // Guaranteed by the review step
        let name = draft
            .name()
            .cloned()
            .ok_or_else(|| DomainError::validation("Character name is required"))?;
        let base_scores = draft
            .ability_scores()
            .copied()
            .ok_or_else(|| DomainError::validation("Ability scores are required"))?;

        let subrace = draft.subrace_id().and_then(|id| rules.race.subrace(id));

        let mut scores = base_scores;
        for bonus in &rules.race.ability_bonuses {
            scores = scores.with_bonus(&bonus.ability, bonus.bonus);
        }
        if let Some(subrace) = subrace {
            for bonus in &subrace.ability_bonuses {
                scores = scores.with_bonus(&bonus.ability, bonus.bonus);
            }
        }
        for choice in draft.choices() {
            for bonus in &choice.ability_score_choices {
                scores = scores.with_bonus(&bonus.ability, bonus.bonus);
            }
        }

        let scores = scores.clamped();

        let hit_die = i32::try_from(rules.class.hit_die).unwrap_or(i32::MAX);
        let max_hit_points = hit_die
            .saturating_add(ability_modifier(scores.constitution()))
            .max(1);

        let skill_proficiencies = merge_unique(
            rules.background.skill_proficiencies.iter().cloned(),
            selected_keys(draft.choices(), choice_type::SKILL),
        );
        let languages = merge_unique(
            rules
                .race
                .languages
                .iter()
                .chain(&rules.background.languages)
                .cloned(),
            selected_keys(draft.choices(), choice_type::LANGUAGE),
        );
        let equipment = rules
            .class
            .starting_equipment
            .iter()
            .map(|item| item.id.clone())
            .chain(selected_keys(draft.choices(), choice_type::EQUIPMENT))
            .collect();

        Ok(Self {
            id,
            player_id: draft.player_id().clone(),
            session_id: draft.session_id().cloned(),
            name,
            race_id: draft.race_id().to_string(),
            subrace_id: draft.subrace_id().map(str::to_string),
            class_id: draft.class_id().to_string(),
            background_id: draft.background_id().to_string(),
            alignment: draft.alignment().to_string(),
            ability_scores: scores,
            level: 1,
            max_hit_points,
            skill_proficiencies,
            languages,
            equipment,
            choices: draft.choices().to_vec(),
            created_at: now,
        })
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
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

    pub fn ability_scores(&self) -> &AbilityScores {
        &self.ability_scores
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn max_hit_points(&self) -> i32 {
        self.max_hit_points
    }

    pub fn skill_proficiencies(&self) -> &[String] {
        &self.skill_proficiencies
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn equipment(&self) -> &[String] {
        &self.equipment
    }

    pub fn choices(&self) -> &[ChoiceSelection] {
        &self.choices
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn selected_keys<'a>(
    choices: &'a [ChoiceSelection],
    kind: &'a str,
) -> impl Iterator<Item = String> + 'a {
    choices
        .iter()
        .filter(move |c| c.is_type(kind))
        .flat_map(|c| c.selected_keys.iter().cloned())
}

/// Concatenate, dropping repeats but keeping first-seen order.
fn merge_unique(
    fixed: impl Iterator<Item = String>,
    chosen: impl Iterator<Item = String>,
) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for value in fixed.chain(chosen) {
        if !merged.contains(&value) {
            merged.push(value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::DraftId;
    use crate::rules::{AbilityBonus, ItemReference, SubraceInfo};
    use crate::value_objects::{choice_source, AbilityScoreChoice};

    fn dwarf() -> RaceInfo {
        RaceInfo {
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
        }
    }

    fn fighter() -> ClassInfo {
        ClassInfo {
            id: "fighter".into(),
            name: "Fighter".into(),
            description: String::new(),
            hit_die: 10,
            primary_abilities: vec!["str".into()],
            saving_throws: vec!["str".into(), "con".into()],
            skill_choice: None,
            starting_equipment: vec![ItemReference::new("explorers-pack", "Explorer's Pack")],
            equipment_choices: vec![],
        }
    }

    fn soldier() -> BackgroundInfo {
        BackgroundInfo {
            id: "soldier".into(),
            name: "Soldier".into(),
            description: String::new(),
            skill_proficiencies: vec!["athletics".into(), "intimidation".into()],
            languages: vec![],
            feature: "Military Rank".into(),
            language_choice: None,
        }
    }

    fn complete_draft() -> CharacterDraft {
        CharacterDraft::new(DraftId::new(), PlayerId::new("p1").unwrap(), None, Utc::now())
            .with_name(CharacterName::new("Bruenor").unwrap())
            .with_race("dwarf", Some("hill-dwarf".into()))
            .with_class("fighter")
            .with_background("soldier")
            .with_ability_scores(AbilityScores::from_raw(15, 12, 14, 8, 10, 13))
            .with_choices(vec![
                ChoiceSelection::new("fighter_skills", choice_type::SKILL, choice_source::CLASS)
                    .with_selected_keys(["athletics", "perception"]),
                ChoiceSelection::new(
                    "fighter_equipment_1",
                    choice_type::EQUIPMENT,
                    choice_source::CLASS,
                )
                .with_selected_keys(["chain-mail"]),
                ChoiceSelection::new("feat_bonus", choice_type::ABILITY_SCORE, choice_source::OTHER)
                    .with_ability_score_choices(vec![AbilityScoreChoice::new("str", 1)]),
            ])
    }

    #[test]
    fn from_draft_applies_bonuses_and_derives_hit_points() {
        let (race, class, background) = (dwarf(), fighter(), soldier());
        let rules = FinalizationRules {
            race: &race,
            class: &class,
            background: &background,
        };

        let character =
            Character::from_draft(CharacterId::new(), &complete_draft(), rules, Utc::now())
                .unwrap();

        assert_eq!(character.ability_scores().constitution(), 16);
        assert_eq!(character.ability_scores().wisdom(), 11);
        assert_eq!(character.ability_scores().strength(), 16);
        assert_eq!(character.max_hit_points(), 13);
        assert_eq!(character.level(), 1);
        assert_eq!(
            character.skill_proficiencies(),
            &["athletics", "intimidation", "perception"]
        );
        assert_eq!(character.languages(), &["common", "dwarvish"]);
        assert_eq!(character.equipment(), &["explorers-pack", "chain-mail"]);
    }

    #[test]
    fn from_draft_rejects_incomplete_draft() {
        let (race, class, background) = (dwarf(), fighter(), soldier());
        let rules = FinalizationRules {
            race: &race,
            class: &class,
            background: &background,
        };
        let draft = complete_draft().with_choices(vec![]);

        let result = Character::from_draft(CharacterId::new(), &draft, rules, Utc::now());
        assert!(matches!(result, Err(DomainError::InvalidStateTransition(_))));
    }

    #[test]
    fn oversized_choice_bonuses_are_clamped() {
        let (race, class, background) = (dwarf(), fighter(), soldier());
        let rules = FinalizationRules {
            race: &race,
            class: &class,
            background: &background,
        };
        let mut choices = complete_draft().choices().to_vec();
        choices.push(
            ChoiceSelection::new("bad_bonus", choice_type::ABILITY_SCORE, choice_source::OTHER)
                .with_ability_score_choices(vec![
                    AbilityScoreChoice::new("con", i32::MAX),
                    AbilityScoreChoice::new("dex", i32::MIN),
                ]),
        );
        let draft = complete_draft().with_choices(choices);

        let character =
            Character::from_draft(CharacterId::new(), &draft, rules, Utc::now()).unwrap();

        assert_eq!(character.ability_scores().constitution(), 30);
        assert_eq!(character.ability_scores().dexterity(), 1);
        assert_eq!(character.max_hit_points(), 20);
    }

    #[test]
    fn hit_points_never_drop_below_one() {
        let (race, mut class, background) = (dwarf(), fighter(), soldier());
        class.hit_die = 1;
        let rules = FinalizationRules {
            race: &race,
            class: &class,
            background: &background,
        };
        let draft =
            complete_draft().with_ability_scores(AbilityScores::from_raw(15, 12, 1, 8, 10, 13));

        let character =
            Character::from_draft(CharacterId::new(), &draft, rules, Utc::now()).unwrap();
        assert_eq!(character.max_hit_points(), 1);
    }
}
