//! Starting-equipment choice trees.

use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

fn default_choose() -> u32 {
    1
}

/// A concrete item in the equipment catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReference {
    pub id: String,
    pub name: String,
}

impl ItemReference {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A named equipment category the client resolves itself (e.g. "martial-weapons").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCategoryRef {
    pub id: String,
    pub name: String,
}

/// One "choose N" equipment slot.
///
/// Either `options` lists what can be picked, or `from_category` points at an
/// external category. Nested choices inside bundles reuse this type, so the
/// tree can be arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentChoice {
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_choose")]
    pub choose: u32,
    #[serde(default)]
    pub options: Vec<EquipmentOption>,
    #[serde(default)]
    pub from_category: Option<EquipmentCategoryRef>,
}

impl EquipmentChoice {
    pub fn new(description: impl Into<String>, choose: u32) -> Self {
        Self {
            description: description.into(),
            choose,
            options: Vec::new(),
            from_category: None,
        }
    }

    pub fn with_option(mut self, option: EquipmentOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn from_category(mut self, category: EquipmentCategoryRef) -> Self {
        self.from_category = Some(category);
        self
    }
}

/// One selectable option within a slot: a list of members granted together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquipmentOption {
    #[serde(default)]
    pub items: Vec<EquipmentOptionItem>,
}

impl EquipmentOption {
    /// A single item at quantity 1.
    pub fn single(item: ItemReference) -> Self {
        Self {
            items: vec![EquipmentOptionItem::item(item, 1)],
        }
    }

    /// A single item at the given quantity.
    pub fn counted(item: ItemReference, quantity: u32) -> Self {
        Self {
            items: vec![EquipmentOptionItem::item(item, quantity)],
        }
    }

    /// Several members granted together.
    pub fn bundle(items: Vec<EquipmentOptionItem>) -> Self {
        Self { items }
    }
}

/// A member of an option, as the provider sends it.
///
/// Well-formed members carry either `item` or `choice`. Members with neither
/// occur in provider data and are not rejected at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentOptionItem {
    #[serde(default)]
    pub item: Option<ItemReference>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub choice: Option<Box<EquipmentChoice>>,
}

impl EquipmentOptionItem {
    pub fn item(item: ItemReference, quantity: u32) -> Self {
        Self {
            item: Some(item),
            quantity,
            choice: None,
        }
    }

    pub fn nested(choice: EquipmentChoice) -> Self {
        Self {
            item: None,
            quantity: 1,
            choice: Some(Box::new(choice)),
        }
    }

    /// A member with neither an item nor a nested choice.
    pub fn empty() -> Self {
        Self {
            item: None,
            quantity: 0,
            choice: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_json_with_nested_choice_deserializes() {
        let json = r#"{
            "description": "(a) a martial weapon and a shield or (b) two martial weapons",
            "choose": 1,
            "options": [
                {"items": [
                    {"choice": {"description": "a martial weapon", "from_category": {"id": "martial-weapons", "name": "Martial Weapons"}}},
                    {"item": {"id": "shield", "name": "Shield"}}
                ]}
            ]
        }"#;

        let choice: EquipmentChoice = serde_json::from_str(json).unwrap();
        let members = &choice.options[0].items;
        assert_eq!(members.len(), 2);
        let nested = members[0].choice.as_ref().unwrap();
        assert_eq!(nested.choose, 1);
        assert_eq!(nested.from_category.as_ref().unwrap().id, "martial-weapons");
        assert_eq!(members[1].quantity, 1);
    }

    #[test]
    fn member_without_item_or_choice_still_deserializes() {
        let member: EquipmentOptionItem = serde_json::from_str(r#"{"quantity": 2}"#).unwrap();
        assert!(member.item.is_none());
        assert!(member.choice.is_none());
    }
}
