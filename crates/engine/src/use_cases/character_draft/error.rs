//! Character draft operation errors.

use crate::conversions::choice_resolver::ChoiceResolutionError;
use crate::infrastructure::ports::RepoError;
use charforge_domain::{DomainError, DraftId};

/// Errors that can occur during draft operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterDraftError {
    #[error("Draft not found: {0}")]
    DraftNotFound(DraftId),

    #[error("{kind} not found in rules data: {id}")]
    RulesNotFound { kind: &'static str, id: String },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),

    #[error("Choice resolution error: {0}")]
    Choices(#[from] ChoiceResolutionError),
}
