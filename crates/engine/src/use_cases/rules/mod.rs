//! Rules lookup use cases.
//!
//! Resolves wire enums to rules-provider ids and renders hydrated rules
//! views with flattened choices.

mod error;

pub use error::RulesError;

use std::sync::Arc;

use charforge_shared::enums::{Background, Class, Race, WireEnum};
use charforge_shared::rules::{BackgroundInfoData, ClassInfoData, RaceInfoData};

use crate::conversions::draft_assembler::DraftAssembler;
use crate::conversions::enum_mapper::DomainIdMapping;
use crate::infrastructure::ports::RulesProvider;

pub struct RulesUseCases {
    rules: Arc<dyn RulesProvider>,
    assembler: DraftAssembler,
}

impl RulesUseCases {
    pub fn new(rules: Arc<dyn RulesProvider>, assembler: DraftAssembler) -> Self {
        Self { rules, assembler }
    }

    pub async fn get_race_details(&self, race: Race) -> Result<RaceInfoData, RulesError> {
        let id = race.to_domain_id();
        if id.is_empty() {
            return Err(RulesError::not_found("Race", race.as_str_name()));
        }
        let info = self
            .rules
            .get_race(id)
            .await?
            .ok_or_else(|| RulesError::not_found("Race", id))?;

        tracing::debug!(race_id = %id, "Loaded race details");
        Ok(self.assembler.race_info_view(&info))
    }

    pub async fn get_class_details(&self, class: Class) -> Result<ClassInfoData, RulesError> {
        let id = class.to_domain_id();
        if id.is_empty() {
            return Err(RulesError::not_found("Class", class.as_str_name()));
        }
        let info = self
            .rules
            .get_class(id)
            .await?
            .ok_or_else(|| RulesError::not_found("Class", id))?;

        tracing::debug!(class_id = %id, "Loaded class details");
        Ok(self.assembler.class_info_view(&info)?)
    }

    pub async fn get_background_details(
        &self,
        background: Background,
    ) -> Result<BackgroundInfoData, RulesError> {
        let id = background.to_domain_id();
        if id.is_empty() {
            return Err(RulesError::not_found("Background", background.as_str_name()));
        }
        let info = self
            .rules
            .get_background(id)
            .await?
            .ok_or_else(|| RulesError::not_found("Background", id))?;

        tracing::debug!(background_id = %id, "Loaded background details");
        Ok(self.assembler.background_info_view(&info))
    }

    pub async fn list_races(&self) -> Result<Vec<RaceInfoData>, RulesError> {
        let races = self.rules.list_races().await?;
        Ok(races
            .iter()
            .map(|race| self.assembler.race_info_view(race))
            .collect())
    }

    pub async fn list_classes(&self) -> Result<Vec<ClassInfoData>, RulesError> {
        let classes = self.rules.list_classes().await?;
        classes
            .iter()
            .map(|class| {
                self.assembler
                    .class_info_view(class)
                    .map_err(RulesError::from)
            })
            .collect()
    }

    pub async fn list_backgrounds(&self) -> Result<Vec<BackgroundInfoData>, RulesError> {
        let backgrounds = self.rules.list_backgrounds().await?;
        Ok(backgrounds
            .iter()
            .map(|background| self.assembler.background_info_view(background))
            .collect())
    }
}
