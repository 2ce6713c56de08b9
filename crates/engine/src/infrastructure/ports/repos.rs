//! Port traits for the draft store and the rules data provider.

use async_trait::async_trait;
use charforge_domain::{
    BackgroundInfo, Character, CharacterDraft, ClassInfo, DraftId, PlayerId,
    RaceInfo, SessionId, SubraceInfo,
};

use super::error::RepoError;

// =============================================================================
// Storage Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DraftRepo: Send + Sync {
    async fn get(&self, id: DraftId) -> Result<Option<CharacterDraft>, RepoError>;
    async fn save(&self, draft: &CharacterDraft) -> Result<(), RepoError>;
    async fn delete(&self, id: DraftId) -> Result<(), RepoError>;

    /// Drafts owned by `player_id`; when `session_id` is given, only drafts in that session.
    async fn list_for_player(
        &self,
        player_id: &PlayerId,
        session_id: Option<SessionId>,
    ) -> Result<Vec<CharacterDraft>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn save(&self, character: &Character) -> Result<(), RepoError>;
}

// =============================================================================
// Rules Data
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RulesProvider: Send + Sync {
    async fn get_race(&self, race_id: &str) -> Result<Option<RaceInfo>, RepoError>;
    async fn get_subrace(&self, subrace_id: &str) -> Result<Option<SubraceInfo>, RepoError>;
    async fn get_class(&self, class_id: &str) -> Result<Option<ClassInfo>, RepoError>;
    async fn get_background(&self, background_id: &str)
        -> Result<Option<BackgroundInfo>, RepoError>;

    async fn list_races(&self) -> Result<Vec<RaceInfo>, RepoError>;
    async fn list_classes(&self) -> Result<Vec<ClassInfo>, RepoError>;
    async fn list_backgrounds(&self) -> Result<Vec<BackgroundInfo>, RepoError>;
}
