//! Built-in item components.

use serde::{Deserialize, Serialize};

use crate::common::{BlockDescriptor, MinMax, MolangValue};
use crate::component::Component;
use crate::map::OrderedMap;
use crate::shorthand::{Named, Shorthand};

/// `{ "value": v }`, the long form of several scalar item components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueOf<T> {
    pub value: T,
}

/// A scalar written either bare or wrapped as `{ "value": .. }`.
pub type ScalarOr<T> = Shorthand<T, ValueOf<T>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPlacer {
    pub block: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_on: Option<Vec<BlockDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_block_item: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    pub category: String,
    /// Seconds.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestroySpeed {
    pub block: BlockDescriptor,
    pub speed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Digger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_efficiency: Option<bool>,

    pub destroy_speeds: Vec<DestroySpeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDisplayName {
    /// Literal text or a localization key.
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durability {
    pub max_durability: u32,

    /// Percent chance that a use consumes durability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_chance: Option<MinMax<u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchantable {
    /// Enchantment slot such as `sword`, `armor_head`, `pickaxe`.
    pub slot: String,
    pub value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Food {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation_modifier: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_always_eat: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub using_converts_to: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    /// Seconds of smelting.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIcon {
    /// Texture per icon slot; `default` is the one normally shown.
    pub textures: OrderedMap<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairEntry {
    pub items: Vec<String>,
    pub repair_amount: MolangValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repairable {
    pub repair_items: Vec<RepairEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Throwable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_swing_animation: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_power_scale: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_draw_duration: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_launch_power: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_draw_duration: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_power_by_draw_duration: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UseModifiers {
    /// Seconds the item must be held to complete a use.
    pub use_duration: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_modifier: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    #[serde(rename = "slot.armor.head")]
    Head,
    #[serde(rename = "slot.armor.chest")]
    Chest,
    #[serde(rename = "slot.armor.legs")]
    Legs,
    #[serde(rename = "slot.armor.feet")]
    Feet,
    #[serde(rename = "slot.weapon.offhand")]
    Offhand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wearable {
    pub slot: EquipmentSlot,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection: Option<i32>,
}

/// Every built-in item component, keyed by its `minecraft:` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemComponent {
    #[serde(rename = "minecraft:allow_off_hand")]
    AllowOffHand(ScalarOr<bool>),

    #[serde(rename = "minecraft:block_placer")]
    BlockPlacer(BlockPlacer),

    #[serde(rename = "minecraft:cooldown")]
    Cooldown(Cooldown),

    #[serde(rename = "minecraft:custom_components")]
    CustomComponents(Vec<String>),

    #[serde(rename = "minecraft:damage")]
    Damage(ScalarOr<i32>),

    #[serde(rename = "minecraft:digger")]
    Digger(Digger),

    #[serde(rename = "minecraft:display_name")]
    DisplayName(ItemDisplayName),

    #[serde(rename = "minecraft:durability")]
    Durability(Durability),

    #[serde(rename = "minecraft:enchantable")]
    Enchantable(Enchantable),

    #[serde(rename = "minecraft:food")]
    Food(Food),

    #[serde(rename = "minecraft:fuel")]
    Fuel(Fuel),

    #[serde(rename = "minecraft:glint")]
    Glint(ScalarOr<bool>),

    #[serde(rename = "minecraft:hand_equipped")]
    HandEquipped(ScalarOr<bool>),

    #[serde(rename = "minecraft:icon")]
    Icon(Named<ItemIcon>),

    #[serde(rename = "minecraft:max_stack_size")]
    MaxStackSize(ScalarOr<u8>),

    #[serde(rename = "minecraft:rarity")]
    Rarity(ScalarOr<Rarity>),

    #[serde(rename = "minecraft:repairable")]
    Repairable(Repairable),

    #[serde(rename = "minecraft:tags")]
    Tags(Tags),

    #[serde(rename = "minecraft:throwable")]
    Throwable(Throwable),

    #[serde(rename = "minecraft:use_modifiers")]
    UseModifiers(UseModifiers),

    #[serde(rename = "minecraft:wearable")]
    Wearable(Wearable),
}

impl Component for ItemComponent {
    fn name(&self) -> &'static str {
        match self {
            Self::AllowOffHand(_) => "minecraft:allow_off_hand",
            Self::BlockPlacer(_) => "minecraft:block_placer",
            Self::Cooldown(_) => "minecraft:cooldown",
            Self::CustomComponents(_) => "minecraft:custom_components",
            Self::Damage(_) => "minecraft:damage",
            Self::Digger(_) => "minecraft:digger",
            Self::DisplayName(_) => "minecraft:display_name",
            Self::Durability(_) => "minecraft:durability",
            Self::Enchantable(_) => "minecraft:enchantable",
            Self::Food(_) => "minecraft:food",
            Self::Fuel(_) => "minecraft:fuel",
            Self::Glint(_) => "minecraft:glint",
            Self::HandEquipped(_) => "minecraft:hand_equipped",
            Self::Icon(_) => "minecraft:icon",
            Self::MaxStackSize(_) => "minecraft:max_stack_size",
            Self::Rarity(_) => "minecraft:rarity",
            Self::Repairable(_) => "minecraft:repairable",
            Self::Tags(_) => "minecraft:tags",
            Self::Throwable(_) => "minecraft:throwable",
            Self::UseModifiers(_) => "minecraft:use_modifiers",
            Self::Wearable(_) => "minecraft:wearable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentMap;

    #[test]
    fn scalar_or_value_forms() {
        let short: ScalarOr<u8> = serde_json::from_str("16").unwrap();
        assert_eq!(short, Shorthand::Short(16));

        let full: ScalarOr<u8> = serde_json::from_str(r#"{"value": 1}"#).unwrap();
        assert_eq!(full, Shorthand::Full(ValueOf { value: 1 }));
        assert_eq!(serde_json::to_string(&full).unwrap(), r#"{"value":1}"#);
    }

    #[test]
    fn sword_components_parse() {
        let json = r#"{
            "minecraft:icon": {"textures": {"default": "ruby_sword"}},
            "minecraft:max_stack_size": 1,
            "minecraft:hand_equipped": {"value": true},
            "minecraft:durability": {"max_durability": 420, "damage_chance": {"min": 60, "max": 100}},
            "minecraft:damage": 7,
            "minecraft:enchantable": {"slot": "sword", "value": 10},
            "minecraft:repairable": {"repair_items": [{"items": ["mymod:ruby"], "repair_amount": "context.other->q.remaining_durability + 0.05 * context.other->q.max_durability"}]},
            "minecraft:wearable": {"slot": "slot.weapon.offhand"},
            "mymod:lifesteal": {"ratio": 0.1}
        }"#;
        let map: ComponentMap<ItemComponent> = serde_json::from_str(json).unwrap();
        assert_eq!(map.len(), 9);
        assert!(map.contains("mymod:lifesteal"));
        assert!(matches!(
            map.builtins().next(),
            Some(ItemComponent::Icon(Shorthand::Full(icon))) if icon.textures.get("default").is_some()
        ));
        assert!(map.builtins().any(|c| matches!(
            c,
            ItemComponent::Wearable(Wearable { slot: EquipmentSlot::Offhand, protection: None })
        )));
    }

    #[test]
    fn rarity_literals() {
        let c = ItemComponent::Rarity(Shorthand::Short(Rarity::Epic));
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"minecraft:rarity":"epic"}"#
        );
        assert_eq!(c.name(), "minecraft:rarity");
    }

    /// Every variant's `name()` must match the key serde writes for it.
    #[test]
    fn names_match_serde_keys() {
        let samples = vec![
            ItemComponent::AllowOffHand(Shorthand::Short(true)),
            ItemComponent::BlockPlacer(BlockPlacer {
                block: "mymod:lamp".into(),
                use_on: None,
                replace_block_item: Some(true),
            }),
            ItemComponent::Cooldown(Cooldown { category: "mymod:wand".into(), duration: 1.5 }),
            ItemComponent::CustomComponents(vec!["mymod:on_use".into()]),
            ItemComponent::Damage(Shorthand::Short(5)),
            ItemComponent::Digger(Digger {
                use_efficiency: Some(true),
                destroy_speeds: vec![DestroySpeed {
                    block: Shorthand::Short("minecraft:stone".into()),
                    speed: 6,
                }],
            }),
            ItemComponent::DisplayName(ItemDisplayName { value: "item.mymod:wand.name".into() }),
            ItemComponent::Durability(Durability { max_durability: 100, damage_chance: None }),
            ItemComponent::Enchantable(Enchantable { slot: "pickaxe".into(), value: 14 }),
            ItemComponent::Food(Food::default()),
            ItemComponent::Fuel(Fuel { duration: 10.0 }),
            ItemComponent::Glint(Shorthand::Full(ValueOf { value: true })),
            ItemComponent::HandEquipped(Shorthand::Short(true)),
            ItemComponent::Icon(Shorthand::Short("wand".into())),
            ItemComponent::MaxStackSize(Shorthand::Short(16)),
            ItemComponent::Rarity(Shorthand::Short(Rarity::Rare)),
            ItemComponent::Repairable(Repairable {
                repair_items: vec![RepairEntry {
                    items: vec!["minecraft:stick".into()],
                    repair_amount: MolangValue::Int(25),
                }],
            }),
            ItemComponent::Tags(Tags { tags: vec!["minecraft:is_tool".into()] }),
            ItemComponent::Throwable(Throwable::default()),
            ItemComponent::UseModifiers(UseModifiers { use_duration: 1.6, movement_modifier: None }),
            ItemComponent::Wearable(Wearable { slot: EquipmentSlot::Head, protection: Some(2) }),
        ];
        assert_eq!(samples.len(), 21);
        for c in samples {
            let value = serde_json::to_value(&c).unwrap();
            let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
            assert_eq!(keys, vec![c.name()], "{}", c.name());
        }
    }
}
