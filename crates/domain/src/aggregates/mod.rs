//! Aggregates for the character creation flow.

pub mod character;
pub mod character_draft;

pub use character::{Character, FinalizationRules};
pub use character_draft::CharacterDraft;
