//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Draft and character storage (owned by the persistence collaborator)
//! - Rules data (race/class/background definitions)
//! - Clock/Id generation (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::{CharacterRepo, DraftRepo, RulesProvider};
pub use testing::{ClockPort, IdGeneratorPort};

#[cfg(test)]
pub use repos::{MockCharacterRepo, MockDraftRepo, MockRulesProvider};
#[cfg(test)]
pub use testing::{MockClockPort, MockIdGeneratorPort};
