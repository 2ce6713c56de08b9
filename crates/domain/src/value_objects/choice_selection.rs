//! A player's answer to one choice prompt.

use serde::{Deserialize, Serialize};

/// Domain identifiers for choice types.
pub mod choice_type {
    pub const SKILL: &str = "skill";
    pub const LANGUAGE: &str = "language";
    pub const TOOL: &str = "tool";
    pub const FEAT: &str = "feat";
    pub const EQUIPMENT: &str = "equipment";
    pub const SPELL: &str = "spell";
    pub const ABILITY_SCORE: &str = "ability-score";
}

/// Domain identifiers for where a choice comes from.
pub mod choice_source {
    pub const RACE: &str = "race";
    pub const SUBRACE: &str = "subrace";
    pub const CLASS: &str = "class";
    pub const BACKGROUND: &str = "background";
    pub const OTHER: &str = "other";
}

/// An ability-score bonus picked as part of a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScoreChoice {
    pub ability: String,
    pub bonus: i32,
}

impl AbilityScoreChoice {
    pub fn new(ability: impl Into<String>, bonus: i32) -> Self {
        Self {
            ability: ability.into(),
            bonus,
        }
    }
}

/// A player's selection for a single choice slot.
///
/// `choice_id` is a stable key into the rules provider's choice catalog.
/// Selected keys are carried verbatim; checking them against the provider's
/// definition belongs to the rules collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSelection {
    pub choice_id: String,
    pub choice_type: String,
    pub source: String,
    #[serde(default)]
    pub selected_keys: Vec<String>,
    #[serde(default)]
    pub ability_score_choices: Vec<AbilityScoreChoice>,
}

impl ChoiceSelection {
    pub fn new(
        choice_id: impl Into<String>,
        choice_type: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            choice_id: choice_id.into(),
            choice_type: choice_type.into(),
            source: source.into(),
            selected_keys: Vec::new(),
            ability_score_choices: Vec::new(),
        }
    }

    pub fn with_selected_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ability_score_choices(mut self, choices: Vec<AbilityScoreChoice>) -> Self {
        self.ability_score_choices = choices;
        self
    }

    pub fn is_type(&self, choice_type: &str) -> bool {
        self.choice_type == choice_type
    }

    pub fn is_from(&self, source: &str) -> bool {
        self.source == source
    }

    /// A skill pick owned by the skills step rather than granted by race,
    /// subrace or background.
    pub fn is_skills_step_pick(&self) -> bool {
        self.is_type(choice_type::SKILL)
            && !self.is_from(choice_source::RACE)
            && !self.is_from(choice_source::SUBRACE)
            && !self.is_from(choice_source::BACKGROUND)
    }

    /// A skills-step pick with at least one key; this is what completes the step.
    pub fn completes_skills_step(&self) -> bool {
        self.is_skills_step_pick() && !self.selected_keys.is_empty()
    }

    /// Whether the player actually picked something.
    pub fn has_selection(&self) -> bool {
        !self.selected_keys.is_empty() || !self.ability_score_choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_keys_and_bonuses() {
        let selection = ChoiceSelection::new(
            "half-elf_abilities",
            choice_type::ABILITY_SCORE,
            choice_source::RACE,
        )
        .with_ability_score_choices(vec![
            AbilityScoreChoice::new("dex", 1),
            AbilityScoreChoice::new("con", 1),
        ]);

        assert!(selection.is_type(choice_type::ABILITY_SCORE));
        assert!(selection.is_from(choice_source::RACE));
        assert!(selection.has_selection());
        assert!(selection.selected_keys.is_empty());
    }

    #[test]
    fn empty_selection_has_nothing_selected() {
        let selection =
            ChoiceSelection::new("fighter_skills", choice_type::SKILL, choice_source::CLASS);
        assert!(!selection.has_selection());

        let picked = selection.with_selected_keys(["athletics", "perception"]);
        assert_eq!(picked.selected_keys, vec!["athletics", "perception"]);
    }

    #[test]
    fn only_class_and_other_skill_picks_belong_to_the_skills_step() {
        let class_pick =
            ChoiceSelection::new("fighter_skills", choice_type::SKILL, choice_source::CLASS)
                .with_selected_keys(["athletics"]);
        let other_pick = ChoiceSelection::new("feat_skills", choice_type::SKILL, choice_source::OTHER)
            .with_selected_keys(["stealth"]);
        let race_pick =
            ChoiceSelection::new("half-elf_skills", choice_type::SKILL, choice_source::RACE)
                .with_selected_keys(["insight"]);
        let languages =
            ChoiceSelection::new("fighter_languages", choice_type::LANGUAGE, choice_source::CLASS)
                .with_selected_keys(["elvish"]);

        assert!(class_pick.completes_skills_step());
        assert!(other_pick.completes_skills_step());
        assert!(!race_pick.is_skills_step_pick());
        assert!(!languages.is_skills_step_pick());
        assert!(!ChoiceSelection::new("fighter_skills", choice_type::SKILL, choice_source::CLASS)
            .completes_skills_step());
    }

    #[test]
    fn missing_collections_deserialize_as_empty() {
        let json = r#"{"choice_id":"c","choice_type":"skill","source":"class"}"#;
        let selection: ChoiceSelection = serde_json::from_str(json).unwrap();
        assert!(selection.selected_keys.is_empty());
        assert!(selection.ability_score_choices.is_empty());
    }
}
