//! Character draft use cases.
//!
//! Every write follows the same path: request -> domain input -> aggregate
//! mutation -> persist -> hydrate -> render. Progress is never stored; the
//! rendered view derives it from the saved draft.

mod error;

pub use error::CharacterDraftError;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use charforge_domain::common::some_if_not_empty;
use charforge_domain::{
    Character, CharacterDraft, CharacterId, DomainError, DraftId, FinalizationRules, PlayerId,
    SessionId,
};
use charforge_shared::draft::{CharacterData, CharacterDraftData};
use charforge_shared::requests::{
    CreateDraftRequest, DeleteDraftRequest, FinalizeDraftRequest, GetDraftRequest,
    ListDraftsRequest, UpdateAbilityScoresRequest, UpdateAlignmentRequest,
    UpdateBackgroundRequest, UpdateClassRequest, UpdateNameRequest, UpdateRaceRequest,
    UpdateSkillsRequest,
};

use crate::conversions::draft_assembler::{self, DraftAssembler, DraftHydration};
use crate::infrastructure::ports::{
    CharacterRepo, ClockPort, DraftRepo, IdGeneratorPort, RulesProvider,
};

/// Container for character draft use cases.
pub struct CharacterDraftUseCases {
    draft_repo: Arc<dyn DraftRepo>,
    character_repo: Arc<dyn CharacterRepo>,
    rules: Arc<dyn RulesProvider>,
    clock: Arc<dyn ClockPort>,
    ids: Arc<dyn IdGeneratorPort>,
    assembler: DraftAssembler,
}

impl CharacterDraftUseCases {
    pub fn new(
        draft_repo: Arc<dyn DraftRepo>,
        character_repo: Arc<dyn CharacterRepo>,
        rules: Arc<dyn RulesProvider>,
        clock: Arc<dyn ClockPort>,
        ids: Arc<dyn IdGeneratorPort>,
        assembler: DraftAssembler,
    ) -> Self {
        Self {
            draft_repo,
            character_repo,
            rules,
            clock,
            ids,
            assembler,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub async fn create_draft(
        &self,
        request: CreateDraftRequest,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let input = draft_assembler::create_input(request);
        let draft_id = DraftId::from_uuid(self.ids.gen_uuid());
        let draft = CharacterDraft::create(draft_id, input, self.clock.now())?;

        self.draft_repo.save(&draft).await?;

        tracing::info!(
            draft_id = %draft_id,
            player_id = %draft.player_id(),
            "Created character draft"
        );

        self.render(&draft).await
    }

    pub async fn get_draft(
        &self,
        request: GetDraftRequest,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let draft = self.load(DraftId::from_uuid(request.draft_id)).await?;
        tracing::debug!(draft_id = %draft.id(), "Loaded character draft");
        self.render(&draft).await
    }

    /// A player's drafts, optionally narrowed to one session. Rendered without hydration.
    pub async fn list_drafts(
        &self,
        request: ListDraftsRequest,
    ) -> Result<Vec<CharacterDraftData>, CharacterDraftError> {
        let player_id = PlayerId::new(request.player_id)?;
        let session_id = request
            .session_id
            .and_then(some_if_not_empty)
            .map(SessionId::new)
            .transpose()?;

        let drafts = self
            .draft_repo
            .list_for_player(&player_id, session_id)
            .await?;

        tracing::debug!(
            player_id = %player_id,
            count = drafts.len(),
            "Listed character drafts"
        );

        drafts
            .iter()
            .map(|draft| {
                self.assembler
                    .draft_view(draft, &DraftHydration::default())
                    .map_err(CharacterDraftError::from)
            })
            .collect()
    }

    pub async fn delete_draft(&self, request: DeleteDraftRequest) -> Result<(), CharacterDraftError> {
        let draft_id = DraftId::from_uuid(request.draft_id);
        self.load(draft_id).await?;
        self.draft_repo.delete(draft_id).await?;

        tracing::info!(draft_id = %draft_id, "Deleted character draft");
        Ok(())
    }

    // =========================================================================
    // Field Updates
    // =========================================================================

    pub async fn update_name(
        &self,
        request: UpdateNameRequest,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let input = draft_assembler::update_name_input(request);
        self.mutate(input.draft_id, "name", |draft, now| {
            draft.update_name(input, now)
        })
        .await
    }

    pub async fn update_alignment(
        &self,
        request: UpdateAlignmentRequest,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let input = draft_assembler::update_alignment_input(request);
        self.mutate(input.draft_id, "alignment", |draft, now| {
            draft.update_alignment(input, now);
            Ok(())
        })
        .await
    }

    pub async fn update_race(
        &self,
        request: UpdateRaceRequest,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let input = draft_assembler::update_race_input(request);
        self.mutate(input.draft_id, "race", |draft, now| {
            draft.update_race(input, now)
        })
        .await
    }

    pub async fn update_class(
        &self,
        request: UpdateClassRequest,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let input = draft_assembler::update_class_input(request);
        self.mutate(input.draft_id, "class", |draft, now| {
            draft.update_class(input, now)
        })
        .await
    }

    pub async fn update_background(
        &self,
        request: UpdateBackgroundRequest,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let input = draft_assembler::update_background_input(request);
        self.mutate(input.draft_id, "background", |draft, now| {
            draft.update_background(input, now)
        })
        .await
    }

    pub async fn update_ability_scores(
        &self,
        request: UpdateAbilityScoresRequest,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let input = draft_assembler::update_ability_scores_input(request);
        self.mutate(input.draft_id, "ability_scores", |draft, now| {
            draft.update_ability_scores(input, now)
        })
        .await
    }

    pub async fn update_skills(
        &self,
        request: UpdateSkillsRequest,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let input = draft_assembler::update_skills_input(request);
        self.mutate(input.draft_id, "skills", |draft, now| {
            draft.update_skills(input, now)
        })
        .await
    }

    // =========================================================================
    // Finalization
    // =========================================================================

    /// Turn a complete draft into a character. The draft is deleted afterwards.
    pub async fn finalize_draft(
        &self,
        request: FinalizeDraftRequest,
    ) -> Result<CharacterData, CharacterDraftError> {
        let draft = self.load(DraftId::from_uuid(request.draft_id)).await?;

        let race = self
            .rules
            .get_race(draft.race_id())
            .await?
            .ok_or_else(|| rules_not_found("Race", draft.race_id()))?;
        let class = self
            .rules
            .get_class(draft.class_id())
            .await?
            .ok_or_else(|| rules_not_found("Class", draft.class_id()))?;
        let background = self
            .rules
            .get_background(draft.background_id())
            .await?
            .ok_or_else(|| rules_not_found("Background", draft.background_id()))?;

        let character_id = CharacterId::from_uuid(self.ids.gen_uuid());
        let character = Character::from_draft(
            character_id,
            &draft,
            FinalizationRules {
                race: &race,
                class: &class,
                background: &background,
            },
            self.clock.now(),
        )?;

        self.character_repo.save(&character).await?;
        self.draft_repo.delete(draft.id()).await?;

        tracing::info!(
            draft_id = %draft.id(),
            character_id = %character_id,
            max_hit_points = character.max_hit_points(),
            "Finalized character draft"
        );

        Ok(self.assembler.character_view(&character))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn load(&self, draft_id: DraftId) -> Result<CharacterDraft, CharacterDraftError> {
        self.draft_repo
            .get(draft_id)
            .await?
            .ok_or(CharacterDraftError::DraftNotFound(draft_id))
    }

    async fn mutate(
        &self,
        draft_id: DraftId,
        field: &'static str,
        apply: impl FnOnce(&mut CharacterDraft, DateTime<Utc>) -> Result<(), DomainError>,
    ) -> Result<CharacterDraftData, CharacterDraftError> {
        let mut draft = self.load(draft_id).await?;
        apply(&mut draft, self.clock.now())?;
        self.draft_repo.save(&draft).await?;

        let progress = draft.progress();
        tracing::debug!(
            draft_id = %draft_id,
            field = field,
            steps_completed = progress.steps_completed(),
            current_step = %progress.current_step(),
            "Updated character draft"
        );

        self.render(&draft).await
    }

    /// Look up rules info for whatever the draft has selected so far.
    async fn hydrate(&self, draft: &CharacterDraft) -> Result<DraftHydration, CharacterDraftError> {
        let mut hydration = DraftHydration::default();

        if !draft.race_id().is_empty() {
            hydration.race = self.rules.get_race(draft.race_id()).await?;
        }
        if let Some(subrace_id) = draft.subrace_id() {
            hydration.subrace = match hydration.race.as_ref().and_then(|r| r.subrace(subrace_id)) {
                Some(subrace) => Some(subrace.clone()),
                None => self.rules.get_subrace(subrace_id).await?,
            };
        }
        if !draft.class_id().is_empty() {
            hydration.class = self.rules.get_class(draft.class_id()).await?;
        }
        if !draft.background_id().is_empty() {
            hydration.background = self.rules.get_background(draft.background_id()).await?;
        }

        Ok(hydration)
    }

    async fn render(&self, draft: &CharacterDraft) -> Result<CharacterDraftData, CharacterDraftError> {
        let hydration = self.hydrate(draft).await?;
        Ok(self.assembler.draft_view(draft, &hydration)?)
    }
}

fn rules_not_found(kind: &'static str, id: &str) -> CharacterDraftError {
    CharacterDraftError::RulesNotFound {
        kind,
        id: id.to_string(),
    }
}
