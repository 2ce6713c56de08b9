//! Charforge Shared - wire types exchanged with the transport layer
//!
//! This crate contains the types a transport collaborator decodes requests
//! into and encodes responses from:
//! - Wire enums with stable integer discriminants (`0` = unspecified)
//! - Flattened choices and player selections
//! - Draft, character and rules-information views
//! - Draft operation requests
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and uuid
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `uuid::Uuid` and wire enums

pub mod choices;
pub mod draft;
pub mod enums;
pub mod requests;
pub mod rules;

pub use choices::{
    AbilityScoreChoiceData, BundleItem, Choice, ChoiceOption, ChoiceOptionSet, ChoiceSelectionData,
    CountedItemReference, ItemBundle, ItemReference,
};
pub use draft::{AbilityScoresData, CharacterData, CharacterDraftData, CreationProgressData};
pub use enums::{
    Ability, Alignment, Background, ChoiceCategory, ChoiceSource, Class, CreationStep, Language,
    Race, Skill, WireEnum,
};
pub use requests::{
    CreateDraftRequest, DeleteDraftRequest, DraftSeedData, FinalizeDraftRequest,
    GetDraftRequest, ListDraftsRequest, UpdateAbilityScoresRequest, UpdateAlignmentRequest,
    UpdateBackgroundRequest, UpdateClassRequest, UpdateNameRequest, UpdateRaceRequest,
    UpdateSkillsRequest,
};
pub use rules::{
    AbilityBonusData, BackgroundInfoData, ClassInfoData, RaceInfoData, SubraceInfoData,
};
