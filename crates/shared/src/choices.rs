//! Flattened choices and player selections.
//!
//! A [`Choice`] is what the client renders: an id, a prompt, how many options
//! to pick, and either an explicit option list or a reference to a named
//! category the client resolves on its own. Options are a tagged union so the
//! client dispatches on `kind` instead of guessing from shape.

use serde::{Deserialize, Serialize};

use crate::enums::{Ability, ChoiceCategory, ChoiceSource};

/// A single prompt the player has to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub description: String,
    pub choose_count: u32,
    pub choice_type: ChoiceCategory,
    pub options: ChoiceOptionSet,
}

/// Where a choice's options come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChoiceOptionSet {
    /// Options listed inline
    Explicit { options: Vec<ChoiceOption> },
    /// Any item of a named category (e.g. "martial-weapons")
    CategoryReference {
        category_id: String,
        display_name: String,
    },
}

impl ChoiceOptionSet {
    /// The inline options, empty for category references.
    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            Self::Explicit { options } => options,
            Self::CategoryReference { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReference {
    pub item_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedItemReference {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
}

/// Several items granted together as one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBundle {
    pub bundle_id: String,
    pub items: Vec<BundleItem>,
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChoiceOption {
    Item(ItemReference),
    CountedItem(CountedItemReference),
    Bundle(ItemBundle),
}

impl ChoiceOption {
    /// The key a client submits to select this option.
    pub fn key(&self) -> &str {
        match self {
            Self::Item(item) => &item.item_id,
            Self::CountedItem(item) => &item.item_id,
            Self::Bundle(bundle) => &bundle.bundle_id,
        }
    }
}

/// A member of a bundle: a concrete item, or a choice the player still has to make.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BundleItem {
    Item(CountedItemReference),
    Choice(Box<Choice>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScoreChoiceData {
    pub ability: Ability,
    pub bonus: i32,
}

/// A player's answer to one choice, as submitted and as rendered back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSelectionData {
    pub choice_id: String,
    #[serde(default)]
    pub choice_type: ChoiceCategory,
    #[serde(default)]
    pub source: ChoiceSource,
    #[serde(default)]
    pub selected_keys: Vec<String>,
    #[serde(default)]
    pub ability_score_choices: Vec<AbilityScoreChoiceData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn longsword() -> CountedItemReference {
        CountedItemReference {
            item_id: "longsword".into(),
            name: "Longsword".into(),
            quantity: 1,
        }
    }

    #[test]
    fn options_are_tagged_by_kind() {
        let option = ChoiceOption::CountedItem(CountedItemReference {
            item_id: "javelin".into(),
            name: "Javelin".into(),
            quantity: 5,
        });
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["kind"], "counted_item");
        assert_eq!(json["quantity"], 5);
    }

    #[test]
    fn nested_choice_survives_a_json_round_trip() {
        let nested = Choice {
            id: "fighter_equipment_1_1_1".into(),
            description: "a martial weapon".into(),
            choose_count: 1,
            choice_type: ChoiceCategory::Equipment,
            options: ChoiceOptionSet::CategoryReference {
                category_id: "martial-weapons".into(),
                display_name: "Martial Weapons".into(),
            },
        };
        let option = ChoiceOption::Bundle(ItemBundle {
            bundle_id: "fighter_equipment_1_bundle_1".into(),
            items: vec![BundleItem::Choice(Box::new(nested)), BundleItem::Item(longsword())],
        });

        let json = serde_json::to_string(&option).unwrap();
        let decoded: ChoiceOption = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, option);
        assert_eq!(decoded.key(), "fighter_equipment_1_bundle_1");
    }

    #[test]
    fn category_reference_has_no_inline_options() {
        let set = ChoiceOptionSet::CategoryReference {
            category_id: "simple-weapons".into(),
            display_name: "Simple Weapons".into(),
        };
        assert!(set.options().is_empty());
    }

    #[test]
    fn selection_defaults_missing_enums_and_lists() {
        let selection: ChoiceSelectionData =
            serde_json::from_str(r#"{"choice_id": "fighter_skills"}"#).unwrap();
        assert!(selection.choice_type == ChoiceCategory::Unspecified);
        assert!(selection.source == ChoiceSource::Unspecified);
        assert!(selection.selected_keys.is_empty());
    }
}
