//! Character creation progress tracking.
//!
//! Progress is a derived projection of a draft's fields: a bitmask of the
//! completed steps from which the completion percentage and the next required
//! step are computed on demand. Nothing here is stored separately from the
//! draft.
//!
//! | Step          | Bit | Complete when                                   |
//! |---------------|-----|-------------------------------------------------|
//! | Name          | 1   | name set                                        |
//! | Race          | 2   | race id non-empty                               |
//! | Class         | 4   | class id non-empty                              |
//! | Background    | 8   | background id non-empty                         |
//! | AbilityScores | 16  | all six scores assigned                         |
//! | Skills        | 32  | a skills-step pick with at least one key exists |
//!
//! Skills-step picks are skill selections not granted by race, subrace or
//! background, so changing those steps never touches the Skills bit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregates::CharacterDraft;
use crate::value_objects::ChoiceSelection;

pub const STEP_NAME: u32 = 1 << 0;
pub const STEP_RACE: u32 = 1 << 1;
pub const STEP_CLASS: u32 = 1 << 2;
pub const STEP_BACKGROUND: u32 = 1 << 3;
pub const STEP_ABILITY_SCORES: u32 = 1 << 4;
pub const STEP_SKILLS: u32 = 1 << 5;

/// Every required step.
pub const ALL_STEPS_MASK: u32 =
    STEP_NAME | STEP_RACE | STEP_CLASS | STEP_BACKGROUND | STEP_ABILITY_SCORES | STEP_SKILLS;

/// Denominator for the completion percentage: the six required steps plus
/// the review slot, which is only ever reached by forcing 100.
const PROGRESS_SLOTS: u32 = 7;

/// A step in the character creation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationStep {
    Name,
    Race,
    Class,
    Background,
    AbilityScores,
    Skills,
    /// Terminal state once every required step is complete
    Review,
}

impl CreationStep {
    /// Required steps in the order a player is walked through them.
    pub const REQUIRED: [CreationStep; 6] = [
        CreationStep::Name,
        CreationStep::Race,
        CreationStep::Class,
        CreationStep::Background,
        CreationStep::AbilityScores,
        CreationStep::Skills,
    ];

    /// The bit for this step; `Review` has none.
    pub fn bit(self) -> u32 {
        match self {
            Self::Name => STEP_NAME,
            Self::Race => STEP_RACE,
            Self::Class => STEP_CLASS,
            Self::Background => STEP_BACKGROUND,
            Self::AbilityScores => STEP_ABILITY_SCORES,
            Self::Skills => STEP_SKILLS,
            Self::Review => 0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Race => "Race",
            Self::Class => "Class",
            Self::Background => "Background",
            Self::AbilityScores => "Ability Scores",
            Self::Skills => "Skills",
            Self::Review => "Review",
        }
    }
}

impl fmt::Display for CreationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Completed-steps bitmask with derived percentage and current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Progress {
    steps_completed: u32,
}

impl Progress {
    /// Build from a raw mask. Bits outside the known steps are discarded.
    pub fn from_mask(mask: u32) -> Self {
        Self {
            steps_completed: mask & ALL_STEPS_MASK,
        }
    }

    /// Build from the steps that are complete.
    pub fn from_steps(steps: impl IntoIterator<Item = CreationStep>) -> Self {
        Self::from_mask(steps.into_iter().fold(0, |mask, step| mask | step.bit()))
    }

    pub fn steps_completed(&self) -> u32 {
        self.steps_completed
    }

    pub fn is_step_complete(&self, step: CreationStep) -> bool {
        match step {
            CreationStep::Review => self.is_complete(),
            _ => self.steps_completed & step.bit() != 0,
        }
    }

    pub fn completed_count(&self) -> u32 {
        self.steps_completed.count_ones()
    }

    /// Whether every required step is done.
    pub fn is_complete(&self) -> bool {
        self.steps_completed & ALL_STEPS_MASK == ALL_STEPS_MASK
    }

    /// The first incomplete required step, or `Review` once all are done.
    pub fn current_step(&self) -> CreationStep {
        CreationStep::REQUIRED
            .into_iter()
            .find(|step| self.steps_completed & step.bit() == 0)
            .unwrap_or(CreationStep::Review)
    }

    /// Integer percentage (floored); exactly 100 at `Review`.
    pub fn completion_percentage(&self) -> u32 {
        if self.current_step() == CreationStep::Review {
            return 100;
        }
        self.completed_count() * 100 / PROGRESS_SLOTS
    }
}

/// Derives [`Progress`] from a draft's current field values.
pub struct ProgressTracker;

impl ProgressTracker {
    pub fn track(draft: &CharacterDraft) -> Progress {
        let mut mask = 0;
        if draft.name().is_some() {
            mask |= STEP_NAME;
        }
        if !draft.race_id().is_empty() {
            mask |= STEP_RACE;
        }
        if !draft.class_id().is_empty() {
            mask |= STEP_CLASS;
        }
        if !draft.background_id().is_empty() {
            mask |= STEP_BACKGROUND;
        }
        if draft
            .ability_scores()
            .is_some_and(|scores| scores.is_assigned())
        {
            mask |= STEP_ABILITY_SCORES;
        }
        if draft.choices().iter().any(ChoiceSelection::completes_skills_step) {
            mask |= STEP_SKILLS;
        }
        Progress::from_mask(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mask_starts_at_name() {
        let progress = Progress::from_mask(0);
        assert_eq!(progress.completion_percentage(), 0);
        assert_eq!(progress.current_step(), CreationStep::Name);
        assert!(!progress.is_complete());
    }

    #[test]
    fn name_and_race_is_28_percent_at_class() {
        let progress = Progress::from_mask(3);
        assert_eq!(progress.completion_percentage(), 28);
        assert_eq!(progress.current_step(), CreationStep::Class);
    }

    #[test]
    fn five_steps_is_71_percent_at_skills() {
        let progress = Progress::from_mask(31);
        assert_eq!(progress.completion_percentage(), 71);
        assert_eq!(progress.current_step(), CreationStep::Skills);
    }

    #[test]
    fn all_steps_is_100_percent_at_review() {
        let progress = Progress::from_mask(63);
        assert_eq!(progress.completion_percentage(), 100);
        assert_eq!(progress.current_step(), CreationStep::Review);
        assert!(progress.is_complete());
        assert!(progress.is_step_complete(CreationStep::Review));
    }

    #[test]
    fn current_step_is_first_gap_not_last_completed() {
        let progress = Progress::from_steps([CreationStep::Race, CreationStep::Class]);
        assert_eq!(progress.steps_completed(), STEP_RACE | STEP_CLASS);
        assert_eq!(progress.current_step(), CreationStep::Name);
        assert_eq!(progress.completion_percentage(), 28);
    }

    #[test]
    fn unknown_bits_are_discarded() {
        let progress = Progress::from_mask(64 | STEP_NAME);
        assert_eq!(progress.steps_completed(), STEP_NAME);
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn adding_a_step_never_lowers_percentage() {
        let mut mask = 0;
        let mut last = Progress::from_mask(mask).completion_percentage();
        for step in CreationStep::REQUIRED {
            let before = Progress::from_mask(mask).completed_count();
            mask |= step.bit();
            let progress = Progress::from_mask(mask);
            assert_eq!(progress.completed_count(), before + 1);
            assert!(progress.completion_percentage() >= last);
            last = progress.completion_percentage();
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn step_bits_are_distinct_powers_of_two() {
        let combined = CreationStep::REQUIRED
            .iter()
            .fold(0, |mask, step| {
                assert!(step.bit().is_power_of_two());
                assert_eq!(mask & step.bit(), 0);
                mask | step.bit()
            });
        assert_eq!(combined, ALL_STEPS_MASK);
        assert_eq!(CreationStep::Review.bit(), 0);
    }
}
