//! Charforge Engine library.
//!
//! Server-side core of the character creation flow.
//!
//! ## Structure
//!
//! - `conversions/` - Enum mapping, choice resolution and draft assembly
//! - `use_cases/` - Draft and rules operations orchestrated over ports
//! - `infrastructure/` - Port traits and their adapters

pub mod conversions;
pub mod infrastructure;
pub mod use_cases;

pub use conversions::choice_resolver::{ChoiceResolver, ChoiceResolverConfig};
pub use conversions::draft_assembler::DraftAssembler;
pub use infrastructure::config::EngineConfig;
pub use use_cases::{CharacterDraftUseCases, RulesUseCases};
