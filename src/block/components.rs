//! Built-in block components.

use serde::{Deserialize, Serialize};

use crate::common::{BlockDescriptor, BlockFace, Vec3};
use crate::component::Component;
use crate::map::OrderedMap;
use crate::shorthand::{Named, Shorthand, Toggle};

/// Axis-aligned box in block pixels, origin relative to the block's bottom center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxBounds {
    pub origin: Vec3,
    pub size: Vec3,
}

impl BoxBounds {
    /// The full 16×16×16 cube.
    pub const FULL: Self = Self {
        origin: [-8.0, 0.0, -8.0],
        size: [16.0, 16.0, 16.0],
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftingTable {
    pub crafting_tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplosionResistance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explosion_resistance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpecificSpeed {
    pub item: Named<ItemTagQuery>,
    pub destroy_speed: f64,
}

/// `{ "tags": "q.any_tag('minecraft:is_pickaxe')" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTagQuery {
    pub tags: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiningSpeed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_to_destroy: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_specific_speeds: Option<Vec<ItemSpecificSpeed>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityFallOn {
    pub min_fall_distance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flammability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_chance_modifier: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destroy_chance_modifier: Option<i32>,
}

/// A bone's visibility: a constant or a Molang condition.
pub type BoneVisibility = Shorthand<bool, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryReference {
    pub identifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bone_visibility: Option<OrderedMap<BoneVisibility>>,

    /// Identifier of a block culling rules file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culling: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMethod {
    Opaque,
    DoubleSided,
    Blend,
    AlphaTest,
    AlphaTestSingleSided,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInstance {
    pub texture: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_method: Option<RenderMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_dimming: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient_occlusion: Option<Shorthand<bool, f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub isotropic: Option<bool>,
}

impl MaterialInstance {
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            texture: texture.into(),
            render_method: None,
            face_dimming: None,
            ambient_occlusion: None,
            isotropic: None,
        }
    }

    #[must_use]
    pub const fn render_method(mut self, method: RenderMethod) -> Self {
        self.render_method = Some(method);
        self
    }
}

/// Material instances keyed by face (`*`, `up`, `north`, ...) or custom name.
pub type MaterialInstances = OrderedMap<MaterialInstance>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TintMethod {
    None,
    DefaultFoliage,
    BirchFoliage,
    EvergreenFoliage,
    DryFoliage,
    Grass,
    Water,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapColor {
    /// Hex string such as `#7f7f7f`.
    pub color: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint_method: Option<TintMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_faces: Option<Vec<BlockFace>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_filter: Option<Vec<BlockDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementFilter {
    pub conditions: Vec<PlacementCondition>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedstoneConductivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redstone_conductor: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_wire_to_step_down: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Ticks between updates, picked at random from `[min, max]`.
    pub interval_range: [u32; 2],

    #[serde(skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec3>,

    /// Degrees, multiples of 90.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_pivot: Option<Vec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_pivot: Option<Vec3>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemVisual {
    pub geometry: Named<GeometryReference>,
    pub material_instances: MaterialInstances,
}

/// Every built-in block component, keyed by its `minecraft:` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockComponent {
    #[serde(rename = "minecraft:collision_box")]
    CollisionBox(Toggle<BoxBounds>),

    #[serde(rename = "minecraft:crafting_table")]
    CraftingTable(CraftingTable),

    /// Custom component names registered by scripts (older format versions).
    #[serde(rename = "minecraft:custom_components")]
    CustomComponents(Vec<String>),

    #[serde(rename = "minecraft:destructible_by_explosion")]
    DestructibleByExplosion(Toggle<ExplosionResistance>),

    #[serde(rename = "minecraft:destructible_by_mining")]
    DestructibleByMining(Toggle<MiningSpeed>),

    #[serde(rename = "minecraft:display_name")]
    DisplayName(String),

    #[serde(rename = "minecraft:entity_fall_on")]
    EntityFallOn(EntityFallOn),

    #[serde(rename = "minecraft:flammable")]
    Flammable(Toggle<Flammability>),

    #[serde(rename = "minecraft:friction")]
    Friction(f64),

    #[serde(rename = "minecraft:geometry")]
    Geometry(Named<GeometryReference>),

    #[serde(rename = "minecraft:item_visual")]
    ItemVisual(ItemVisual),

    #[serde(rename = "minecraft:light_dampening")]
    LightDampening(u8),

    #[serde(rename = "minecraft:light_emission")]
    LightEmission(u8),

    #[serde(rename = "minecraft:loot")]
    Loot(String),

    #[serde(rename = "minecraft:map_color")]
    MapColor(Named<MapColor>),

    #[serde(rename = "minecraft:material_instances")]
    MaterialInstances(MaterialInstances),

    #[serde(rename = "minecraft:placement_filter")]
    PlacementFilter(PlacementFilter),

    #[serde(rename = "minecraft:redstone_conductivity")]
    RedstoneConductivity(RedstoneConductivity),

    #[serde(rename = "minecraft:replaceable")]
    Replaceable(crate::common::Empty),

    #[serde(rename = "minecraft:selection_box")]
    SelectionBox(Toggle<BoxBounds>),

    #[serde(rename = "minecraft:tick")]
    Tick(Tick),

    #[serde(rename = "minecraft:transformation")]
    Transformation(Transformation),
}

impl Component for BlockComponent {
    fn name(&self) -> &'static str {
        match self {
            Self::CollisionBox(_) => "minecraft:collision_box",
            Self::CraftingTable(_) => "minecraft:crafting_table",
            Self::CustomComponents(_) => "minecraft:custom_components",
            Self::DestructibleByExplosion(_) => "minecraft:destructible_by_explosion",
            Self::DestructibleByMining(_) => "minecraft:destructible_by_mining",
            Self::DisplayName(_) => "minecraft:display_name",
            Self::EntityFallOn(_) => "minecraft:entity_fall_on",
            Self::Flammable(_) => "minecraft:flammable",
            Self::Friction(_) => "minecraft:friction",
            Self::Geometry(_) => "minecraft:geometry",
            Self::ItemVisual(_) => "minecraft:item_visual",
            Self::LightDampening(_) => "minecraft:light_dampening",
            Self::LightEmission(_) => "minecraft:light_emission",
            Self::Loot(_) => "minecraft:loot",
            Self::MapColor(_) => "minecraft:map_color",
            Self::MaterialInstances(_) => "minecraft:material_instances",
            Self::PlacementFilter(_) => "minecraft:placement_filter",
            Self::RedstoneConductivity(_) => "minecraft:redstone_conductivity",
            Self::Replaceable(_) => "minecraft:replaceable",
            Self::SelectionBox(_) => "minecraft:selection_box",
            Self::Tick(_) => "minecraft:tick",
            Self::Transformation(_) => "minecraft:transformation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentMap;

    /// Every variant's `name()` must match the key serde writes for it.
    #[test]
    fn names_match_serde_keys() {
        let samples = vec![
            BlockComponent::CollisionBox(Toggle::Short(false)),
            BlockComponent::CraftingTable(CraftingTable {
                crafting_tags: vec!["crafting_table".into()],
                table_name: None,
            }),
            BlockComponent::CustomComponents(vec!["mymod:on_step".into()]),
            BlockComponent::DestructibleByExplosion(Toggle::Short(true)),
            BlockComponent::DestructibleByMining(Toggle::Full(MiningSpeed::default())),
            BlockComponent::DisplayName("tile.x.name".into()),
            BlockComponent::EntityFallOn(EntityFallOn { min_fall_distance: 1.0 }),
            BlockComponent::Flammable(Toggle::Full(Flammability::default())),
            BlockComponent::Friction(0.4),
            BlockComponent::Geometry("geometry.x".into()),
            BlockComponent::ItemVisual(ItemVisual {
                geometry: "minecraft:geometry.full_block".into(),
                material_instances: MaterialInstances::new(),
            }),
            BlockComponent::LightDampening(15),
            BlockComponent::LightEmission(7),
            BlockComponent::Loot("loot_tables/blocks/x.json".into()),
            BlockComponent::MapColor("#ffffff".into()),
            BlockComponent::MaterialInstances(MaterialInstances::new()),
            BlockComponent::PlacementFilter(PlacementFilter { conditions: vec![] }),
            BlockComponent::RedstoneConductivity(RedstoneConductivity::default()),
            BlockComponent::Replaceable(crate::common::Empty {}),
            BlockComponent::SelectionBox(Toggle::Full(BoxBounds::FULL)),
            BlockComponent::Tick(Tick { interval_range: [10, 20], looping: None }),
            BlockComponent::Transformation(Transformation::default()),
        ];
        for component in samples {
            let value = serde_json::to_value(&component).unwrap();
            let key = value.as_object().unwrap().keys().next().unwrap().clone();
            assert_eq!(key, component.name());
        }
    }

    #[test]
    fn shorthand_and_full_forms_parse() {
        let json = r##"{
            "minecraft:collision_box": false,
            "minecraft:selection_box": {"origin": [-8, 0, -8], "size": [16, 8, 16]},
            "minecraft:destructible_by_mining": {"seconds_to_destroy": 1.5},
            "minecraft:geometry": {"identifier": "geometry.lamp", "bone_visibility": {"glow": "q.block_state('mymod:lit')"}},
            "minecraft:map_color": "#aa33ff",
            "minecraft:material_instances": {"*": {"texture": "lamp", "render_method": "alpha_test"}}
        }"##;
        let map: ComponentMap<BlockComponent> = serde_json::from_str(json).unwrap();
        assert_eq!(map.len(), 6);

        let builtins: Vec<_> = map.builtins().collect();
        assert_eq!(builtins[0], &BlockComponent::CollisionBox(Toggle::Short(false)));
        assert!(matches!(
            builtins[1],
            BlockComponent::SelectionBox(Shorthand::Full(b)) if b.size == [16.0, 8.0, 16.0]
        ));
        assert!(matches!(builtins[3], BlockComponent::Geometry(Shorthand::Full(g))
            if g.bone_visibility.as_ref().and_then(|v| v.get("glow")).is_some_and(Shorthand::is_full)));
        assert!(matches!(builtins[4], BlockComponent::MapColor(Shorthand::Short(_))));
    }
}
