//! Rules lookup errors.

use crate::conversions::choice_resolver::ChoiceResolutionError;
use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),

    #[error("Choice resolution error: {0}")]
    Choices(#[from] ChoiceResolutionError),
}

impl RulesError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
