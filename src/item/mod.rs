//! Item definitions (`minecraft:item`).

mod components;

pub use components::{
    BlockPlacer, Cooldown, DestroySpeed, Digger, Durability, Enchantable, EquipmentSlot, Food,
    Fuel, ItemComponent, ItemDisplayName, ItemIcon, Rarity, RepairEntry, Repairable, ScalarOr,
    Tags, Throwable, UseModifiers, ValueOf, Wearable,
};

use serde::{Deserialize, Serialize};

use crate::common::MenuCategory;
use crate::component::ComponentMap;
use crate::storage::{ContentFile, ContentKind, FileLayout};

/// Format version written by [`ItemFile::new`].
pub const ITEM_FORMAT_VERSION: &str = "1.21.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFile {
    pub format_version: String,

    #[serde(rename = "minecraft:item")]
    pub item: Item,
}

impl ItemFile {
    #[must_use]
    pub fn new(item: Item) -> Self {
        Self {
            format_version: ITEM_FORMAT_VERSION.to_string(),
            item,
        }
    }
}

impl ContentFile for ItemFile {
    const KIND: ContentKind = ContentKind::Item;
    const LAYOUT: FileLayout = FileLayout::IDENTIFIER;

    fn identifier(&self) -> Option<&str> {
        Some(&self.item.description.identifier)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub description: ItemDescription,

    #[serde(default)]
    pub components: ComponentMap<ItemComponent>,
}

impl Item {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            description: ItemDescription {
                identifier: identifier.into(),
                menu_category: None,
            },
            components: ComponentMap::new(),
        }
    }

    #[must_use]
    pub fn with_component(mut self, component: ItemComponent) -> Self {
        self.components.insert(component);
        self
    }

    #[must_use]
    pub fn with_menu_category(mut self, menu_category: MenuCategory) -> Self {
        self.description.menu_category = Some(menu_category);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDescription {
    pub identifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_category: Option<MenuCategory>,
}
