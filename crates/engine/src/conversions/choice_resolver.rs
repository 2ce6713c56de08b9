//! Choice resolution between rules data and the wire.
//!
//! Read path: a rules provider's equipment choice tree (options made of
//! items, counted items, bundles, bundles holding nested choices) is
//! flattened into [`Choice`] values with stable ids:
//!
//! - slot `i` of a class: `<classId>_equipment_<i+1>`
//! - nested choice at option `o`, member `m`: `<parentId>_<o+1>_<m+1>`
//! - bundle option `o`: key `<choiceId>_bundle_<o+1>`; item options use the item id
//!
//! Write path: client selections are filtered for nulls and mapped to domain
//! [`ChoiceSelection`] records.

use thiserror::Error;

use charforge_domain::common::humanize_id;
use charforge_domain::{
    AbilityScoreChoice, BackgroundInfo, ChoiceSelection, ClassInfo, EquipmentChoice,
    EquipmentOption, EquipmentOptionItem, ItemReference as RulesItemReference,
    ProficiencyChoice, RaceInfo,
};
use charforge_shared::choices::{
    AbilityScoreChoiceData, BundleItem, Choice, ChoiceOption, ChoiceOptionSet,
    ChoiceSelectionData, CountedItemReference, ItemBundle, ItemReference,
};
use charforge_shared::enums::{Ability, ChoiceCategory, ChoiceSource};

use super::enum_mapper::DomainIdMapping;

pub const DEFAULT_MAX_DEPTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceResolverConfig {
    /// Reject malformed bundle members instead of dropping them
    pub strict: bool,
    /// Deepest nested choice allowed below a top-level slot
    pub max_depth: usize,
}

impl Default for ChoiceResolverConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceResolutionError {
    #[error("Choice {choice_id} option {option} member {member} has neither an item nor a choice")]
    MalformedMember {
        choice_id: String,
        option: usize,
        member: usize,
    },

    #[error("Choice {choice_id} option {option} is empty")]
    EmptyOption { choice_id: String, option: usize },

    #[error("Choice {choice_id} nests deeper than {max_depth} levels")]
    DepthExceeded { choice_id: String, max_depth: usize },
}

/// What an option turns into, decided before any output is built.
enum OptionShape<'a> {
    Item(&'a RulesItemReference),
    CountedItem(&'a RulesItemReference, u32),
    Bundle(&'a [EquipmentOptionItem]),
    Empty,
}

impl<'a> OptionShape<'a> {
    fn of(option: &'a EquipmentOption) -> Self {
        match option.items.as_slice() {
            [] => Self::Empty,
            [EquipmentOptionItem {
                item: Some(item),
                quantity,
                ..
            }] => {
                if *quantity > 1 {
                    Self::CountedItem(item, *quantity)
                } else {
                    Self::Item(item)
                }
            }
            members => Self::Bundle(members),
        }
    }
}

/// Flattens rules-provider choices. Pure; holds only configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceResolver {
    config: ChoiceResolverConfig,
}

impl ChoiceResolver {
    pub fn new(config: ChoiceResolverConfig) -> Self {
        Self { config }
    }

    // =========================================================================
    // Read path
    // =========================================================================

    /// All choices a class grants: the skill choice (if any) followed by
    /// equipment slots in provider order.
    pub fn class_choices(&self, class: &ClassInfo) -> Result<Vec<Choice>, ChoiceResolutionError> {
        let mut choices = Vec::with_capacity(class.equipment_choices.len() + 1);
        if let Some(skills) = &class.skill_choice {
            choices.push(proficiency_choice(
                format!("{}_skills", class.id),
                ChoiceCategory::Skills,
                skills,
            ));
        }
        choices.extend(self.equipment_choices(&class.id, &class.equipment_choices)?);
        Ok(choices)
    }

    /// Language and skill choices a race grants.
    pub fn race_choices(&self, race: &RaceInfo) -> Vec<Choice> {
        let languages = race.language_choice.as_ref().map(|choice| {
            proficiency_choice(
                format!("{}_languages", race.id),
                ChoiceCategory::Languages,
                choice,
            )
        });
        let skills = race.skill_choice.as_ref().map(|choice| {
            proficiency_choice(format!("{}_skills", race.id), ChoiceCategory::Skills, choice)
        });
        languages.into_iter().chain(skills).collect()
    }

    pub fn background_choices(&self, background: &BackgroundInfo) -> Vec<Choice> {
        background
            .language_choice
            .as_ref()
            .map(|choice| {
                proficiency_choice(
                    format!("{}_languages", background.id),
                    ChoiceCategory::Languages,
                    choice,
                )
            })
            .into_iter()
            .collect()
    }

    /// Flatten a class's equipment slots.
    pub fn equipment_choices(
        &self,
        class_id: &str,
        slots: &[EquipmentChoice],
    ) -> Result<Vec<Choice>, ChoiceResolutionError> {
        slots
            .iter()
            .enumerate()
            .map(|(i, slot)| self.equipment_choice(format!("{class_id}_equipment_{}", i + 1), slot))
            .collect()
    }

    /// Flatten one equipment slot under the given id.
    pub fn equipment_choice(
        &self,
        id: String,
        slot: &EquipmentChoice,
    ) -> Result<Choice, ChoiceResolutionError> {
        self.convert_slot(id, slot, 0)
    }

    fn convert_slot(
        &self,
        id: String,
        slot: &EquipmentChoice,
        depth: usize,
    ) -> Result<Choice, ChoiceResolutionError> {
        if depth > self.config.max_depth {
            return Err(ChoiceResolutionError::DepthExceeded {
                choice_id: id,
                max_depth: self.config.max_depth,
            });
        }

        let options = match (&slot.from_category, slot.options.is_empty()) {
            (Some(category), true) => ChoiceOptionSet::CategoryReference {
                category_id: category.id.clone(),
                display_name: category.name.clone(),
            },
            _ => {
                let mut options = Vec::with_capacity(slot.options.len());
                for (index, option) in slot.options.iter().enumerate() {
                    options.push(self.convert_option(&id, index, option, depth)?);
                }
                ChoiceOptionSet::Explicit { options }
            }
        };

        let description = match (&options, slot.description.is_empty()) {
            (ChoiceOptionSet::CategoryReference { display_name, .. }, true) => {
                format!("Choose {} from {}", slot.choose, display_name)
            }
            _ => slot.description.clone(),
        };

        Ok(Choice {
            id,
            description,
            choose_count: slot.choose,
            choice_type: ChoiceCategory::Equipment,
            options,
        })
    }

    fn convert_option(
        &self,
        choice_id: &str,
        index: usize,
        option: &EquipmentOption,
        depth: usize,
    ) -> Result<ChoiceOption, ChoiceResolutionError> {
        let members: &[EquipmentOptionItem] = match OptionShape::of(option) {
            OptionShape::Item(item) => {
                return Ok(ChoiceOption::Item(ItemReference {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                }));
            }
            OptionShape::CountedItem(item, quantity) => {
                return Ok(ChoiceOption::CountedItem(counted(item, quantity)));
            }
            OptionShape::Bundle(members) => members,
            OptionShape::Empty => {
                if self.config.strict {
                    return Err(ChoiceResolutionError::EmptyOption {
                        choice_id: choice_id.to_string(),
                        option: index,
                    });
                }
                tracing::warn!(choice_id = %choice_id, option = index, "Option has no items");
                &[]
            }
        };

        let mut items = Vec::with_capacity(members.len());
        for (member_index, member) in members.iter().enumerate() {
            if let Some(item) = self.convert_member(choice_id, index, member_index, member, depth)? {
                items.push(item);
            }
        }

        // Option positions stay stable; an emptied bundle is still an option
        Ok(ChoiceOption::Bundle(ItemBundle {
            bundle_id: format!("{choice_id}_bundle_{}", index + 1),
            items,
        }))
    }

    fn convert_member(
        &self,
        choice_id: &str,
        option_index: usize,
        member_index: usize,
        member: &EquipmentOptionItem,
        depth: usize,
    ) -> Result<Option<BundleItem>, ChoiceResolutionError> {
        if let Some(item) = &member.item {
            return Ok(Some(BundleItem::Item(counted(item, member.quantity.max(1)))));
        }

        if let Some(nested) = &member.choice {
            let nested_id = format!("{choice_id}_{}_{}", option_index + 1, member_index + 1);
            let choice = self.convert_slot(nested_id, nested, depth + 1)?;
            return Ok(Some(BundleItem::Choice(Box::new(choice))));
        }

        if self.config.strict {
            return Err(ChoiceResolutionError::MalformedMember {
                choice_id: choice_id.to_string(),
                option: option_index,
                member: member_index,
            });
        }
        tracing::warn!(
            choice_id = %choice_id,
            option = option_index,
            member = member_index,
            "Dropping bundle member with neither item nor choice"
        );
        Ok(None)
    }
}

fn counted(item: &RulesItemReference, quantity: u32) -> CountedItemReference {
    CountedItemReference {
        item_id: item.id.clone(),
        name: item.name.clone(),
        quantity,
    }
}

/// A flat "pick N of these ids" choice; option names are humanized ids.
pub fn proficiency_choice(
    id: String,
    category: ChoiceCategory,
    choice: &ProficiencyChoice,
) -> Choice {
    let noun = match category {
        ChoiceCategory::Languages => "language",
        ChoiceCategory::Tools => "tool",
        _ => "skill",
    };
    let plural = if choice.choose == 1 { "" } else { "s" };

    Choice {
        id,
        description: format!("Choose {} {noun}{plural}", choice.choose),
        choose_count: choice.choose,
        choice_type: category,
        options: ChoiceOptionSet::Explicit {
            options: choice
                .options
                .iter()
                .map(|key| {
                    ChoiceOption::Item(ItemReference {
                        item_id: key.clone(),
                        name: humanize_id(key),
                    })
                })
                .collect(),
        },
    }
}

// =============================================================================
// Write path
// =============================================================================

/// Convert client selections into domain records.
///
/// `None` entries are dropped, relative order is kept, and an absent list
/// yields an empty one.
pub fn selections_to_domain(
    selections: Option<Vec<Option<ChoiceSelectionData>>>,
) -> Vec<ChoiceSelection> {
    selections
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(selection_to_domain)
        .collect()
}

pub fn selection_to_domain(data: ChoiceSelectionData) -> ChoiceSelection {
    ChoiceSelection::new(
        data.choice_id,
        data.choice_type.to_domain_id(),
        data.source.to_domain_id(),
    )
    .with_selected_keys(data.selected_keys)
    .with_ability_score_choices(
        data.ability_score_choices
            .into_iter()
            .map(|c| AbilityScoreChoice::new(c.ability.to_domain_id(), c.bonus))
            .collect(),
    )
}

pub fn selection_to_wire(selection: &ChoiceSelection) -> ChoiceSelectionData {
    ChoiceSelectionData {
        choice_id: selection.choice_id.clone(),
        choice_type: ChoiceCategory::from_domain_id(&selection.choice_type),
        source: ChoiceSource::from_domain_id(&selection.source),
        selected_keys: selection.selected_keys.clone(),
        ability_score_choices: selection
            .ability_score_choices
            .iter()
            .map(|c| AbilityScoreChoiceData {
                ability: Ability::from_domain_id(&c.ability),
                bonus: c.bonus,
            })
            .collect(),
    }
}
