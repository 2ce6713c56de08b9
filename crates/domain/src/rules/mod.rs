//! Rules-provider input model.
//!
//! These types describe race, class and background definitions exactly as the
//! rules data provider hands them over. They are deserializable so a provider
//! can be backed by a JSON catalog, and they are deliberately permissive: the
//! equipment choice tree may contain malformed members, which the engine's
//! choice resolver decides how to treat.

mod catalog;
mod equipment;

pub use catalog::{
    AbilityBonus, BackgroundInfo, ClassInfo, ProficiencyChoice, RaceInfo, SubraceInfo,
};
pub use equipment::{
    EquipmentCategoryRef, EquipmentChoice, EquipmentOption, EquipmentOptionItem, ItemReference,
};
