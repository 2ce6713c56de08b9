//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod character_draft;
pub mod rules;

pub use character_draft::{CharacterDraftError, CharacterDraftUseCases};
pub use rules::{RulesError, RulesUseCases};
