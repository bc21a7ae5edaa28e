//! Shapes shared by several content kinds.

use serde::{Deserialize, Serialize};

use crate::map::OrderedMap;
use crate::shorthand::Named;

/// `[x, y, z]`
pub type Vec3 = [f64; 3];

/// `[u, v]`
pub type Vec2 = [f64; 2];

/// A number or a Molang expression evaluated by the game.
///
/// Integers and floats are kept apart so an authored `4` is written back as
/// `4`, not `4.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MolangValue {
    Int(i64),
    Float(f64),
    Expression(String),
}

impl From<i64> for MolangValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for MolangValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for MolangValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for MolangValue {
    fn from(v: &str) -> Self {
        Self::Expression(v.to_string())
    }
}

/// A block state or entity property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for StateValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for StateValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for StateValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// Detailed block reference with optional state and tag constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<OrderedMap<StateValue>>,

    /// Molang tag query, e.g. `q.any_tag('stone')`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// A block given by name (`"minecraft:stone"`) or by a [`BlockReference`].
pub type BlockDescriptor = Named<BlockReference>;

/// Inclusive numeric range written as `{ "min": .., "max": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

impl<T> MinMax<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Payload of marker components written as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Creative inventory tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeCategory {
    Construction,
    Equipment,
    Items,
    Nature,
    None,
}

/// Where a block or item appears in the creative menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category: CreativeCategory,

    /// Expandable group, e.g. `minecraft:itemGroup.name.planks`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden_in_commands: Option<bool>,
}

impl MenuCategory {
    #[must_use]
    pub const fn new(category: CreativeCategory) -> Self {
        Self {
            category,
            group: None,
            is_hidden_in_commands: None,
        }
    }
}

/// Block faces as named in placement filters and face mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockFace {
    North,
    South,
    East,
    West,
    Up,
    Down,
    Side,
    All,
}
