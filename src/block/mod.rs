//! Block definitions (`minecraft:block`).
//!
//! ```text
//! {
//!   "format_version": "1.21.0",
//!   "minecraft:block": {
//!     "description": { "identifier": "mymod:custom_stone", ... },
//!     "components": { "minecraft:friction": 0.6, ... },
//!     "permutations": [ { "condition": "...", "components": { ... } } ]
//!   }
//! }
//! ```

mod components;

pub use components::{
    BlockComponent, BoneVisibility, BoxBounds, CraftingTable, EntityFallOn, ExplosionResistance,
    Flammability, GeometryReference, ItemSpecificSpeed, ItemTagQuery, ItemVisual, MapColor,
    MaterialInstance, MaterialInstances, MiningSpeed, PlacementCondition, PlacementFilter,
    RedstoneConductivity, RenderMethod, Tick, TintMethod, Transformation,
};

use serde::{Deserialize, Serialize};

use crate::common::{MenuCategory, StateValue};
use crate::component::{ComponentMap, Permutation};
use crate::map::OrderedMap;
use crate::storage::{ContentFile, ContentKind, FileLayout};

/// Format version written by [`BlockFile::new`].
pub const BLOCK_FORMAT_VERSION: &str = "1.21.0";

/// Top-level block file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockFile {
    pub format_version: String,

    #[serde(rename = "minecraft:block")]
    pub block: Block,
}

impl BlockFile {
    #[must_use]
    pub fn new(block: Block) -> Self {
        Self {
            format_version: BLOCK_FORMAT_VERSION.to_string(),
            block,
        }
    }
}

impl ContentFile for BlockFile {
    const KIND: ContentKind = ContentKind::Block;
    const LAYOUT: FileLayout = FileLayout::IDENTIFIER;

    fn identifier(&self) -> Option<&str> {
        Some(&self.block.description.identifier)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub description: BlockDescription,

    #[serde(default)]
    pub components: ComponentMap<BlockComponent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permutations: Vec<Permutation<BlockComponent>>,
}

impl Block {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            description: BlockDescription::new(identifier),
            components: ComponentMap::new(),
            permutations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_component(mut self, component: BlockComponent) -> Self {
        self.components.insert(component);
        self
    }

    #[must_use]
    pub fn with_permutation(mut self, permutation: Permutation<BlockComponent>) -> Self {
        self.permutations.push(permutation);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDescription {
    pub identifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_category: Option<MenuCategory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<OrderedMap<BlockStateValues>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<BlockTraits>,
}

impl BlockDescription {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            menu_category: None,
            states: None,
            traits: None,
        }
    }
}

/// The values a custom block state can take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockStateValues {
    /// Explicit list: `[false, true]`, `["red", "green"]`, `[0, 1, 2]`.
    List(Vec<StateValue>),
    /// Integer range: `{ "values": { "min": 0, "max": 5 } }`.
    Range { values: StateRange },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRange {
    pub min: i32,
    pub max: i32,
}

impl BlockStateValues {
    pub fn range(min: i32, max: i32) -> Self {
        Self::Range {
            values: StateRange { min, max },
        }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::List(values) => values.len(),
            Self::Range { values } => {
                usize::try_from(i64::from(values.max) - i64::from(values.min) + 1).unwrap_or(0)
            }
        }
    }
}

/// States the placement direction trait can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementDirectionState {
    #[serde(rename = "minecraft:cardinal_direction")]
    CardinalDirection,
    #[serde(rename = "minecraft:facing_direction")]
    FacingDirection,
}

/// States the placement position trait can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementPositionState {
    #[serde(rename = "minecraft:block_face")]
    BlockFace,
    #[serde(rename = "minecraft:vertical_half")]
    VerticalHalf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementDirection {
    pub enabled_states: Vec<PlacementDirectionState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_rotation_offset: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPosition {
    pub enabled_states: Vec<PlacementPositionState>,
}

/// Vanilla-provided states attached to a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockTraits {
    #[serde(
        rename = "minecraft:placement_direction",
        skip_serializing_if = "Option::is_none"
    )]
    pub placement_direction: Option<PlacementDirection>,

    #[serde(
        rename = "minecraft:placement_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub placement_position: Option<PlacementPosition>,
}
