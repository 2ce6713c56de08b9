//! Value objects for the character-creation domain.

mod ability_scores;
mod choice_selection;
mod names;

pub use ability_scores::{
    ability_modifier, AbilityScores, ABILITY_IDS, MAX_ABILITY_SCORE, MIN_ABILITY_SCORE,
};
pub use choice_selection::{choice_source, choice_type, AbilityScoreChoice, ChoiceSelection};
pub use names::{CharacterName, PlayerId, SessionId};
