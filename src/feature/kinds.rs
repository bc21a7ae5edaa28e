//! Bodies of the individual feature kinds.

use serde::{Deserialize, Serialize};

use crate::common::{BlockDescriptor, Empty, MolangValue};
use crate::filter::Filter;
use crate::shorthand::{OneOrMany, Shorthand};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescription {
    pub identifier: String,
}

impl FeatureDescription {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingDirection {
    North,
    South,
    East,
    West,
    Random,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockIntersection {
    pub block_allowlist: Vec<BlockDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounded: Option<Empty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unburied: Option<Empty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_intersection: Option<BlockIntersection>,
}

/// Places a structure saved with a structure block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureTemplateFeature {
    pub description: FeatureDescription,

    /// `mystructure:house` style reference to the `.mcstructure` file.
    pub structure_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_radius: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub facing_direction: Option<FacingDirection>,

    pub constraints: StructureConstraints,
}

/// World generation pass a feature rule runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPass {
    FirstPass,
    BeforeUndergroundPass,
    UndergroundPass,
    AfterUndergroundPass,
    BeforeSurfacePass,
    SurfacePass,
    AfterSurfacePass,
    BeforeSkyPass,
    SkyPass,
    AfterSkyPass,
    FinalPass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionType {
    Uniform,
    Gaussian,
    InverseGaussian,
    Triangle,
    FixedGrid,
    JitteredGrid,
}

/// Full form of a scatter coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateDistribution {
    pub distribution: DistributionType,
    pub extent: [MolangValue; 2],

    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_offset: Option<u32>,
}

/// A coordinate given as a Molang value or a distribution over an extent.
pub type Coordinate = Shorthand<MolangValue, CoordinateDistribution>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChanceFraction {
    pub numerator: u32,
    pub denominator: u32,
}

/// Percent chance, or a `numerator / denominator` fraction.
pub type ScatterChance = Shorthand<MolangValue, ChanceFraction>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

/// Scatter parameters shared by feature rules and scatter features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub iterations: MolangValue,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scatter_chance: Option<ScatterChance>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_eval_order: Option<CoordinateOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Coordinate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Coordinate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Coordinate>,
}

impl Distribution {
    /// `iterations` placements at the given fixed coordinates.
    pub fn at(
        iterations: impl Into<MolangValue>,
        x: impl Into<MolangValue>,
        y: impl Into<MolangValue>,
        z: impl Into<MolangValue>,
    ) -> Self {
        Self {
            iterations: iterations.into(),
            scatter_chance: None,
            coordinate_eval_order: None,
            x: Some(Shorthand::Short(x.into())),
            y: Some(Shorthand::Short(y.into())),
            z: Some(Shorthand::Short(z.into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRulesDescription {
    pub identifier: String,
    pub places_feature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRuleConditions {
    pub placement_pass: PlacementPass,

    #[serde(
        rename = "minecraft:biome_filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub biome_filter: Option<OneOrMany<Filter>>,
}

/// Attaches a feature to world generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRules {
    pub description: FeatureRulesDescription,
    pub conditions: FeatureRuleConditions,
    pub distribution: Distribution,
}

/// Places another feature repeatedly over a scattered area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterFeature {
    pub description: FeatureDescription,
    pub places_feature: String,

    #[serde(flatten)]
    pub distribution: Distribution,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_input_to_floor: Option<bool>,
}

/// `[feature_identifier, weight]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedFeature(pub String, pub f64);

/// Picks one of several features by weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedRandomFeature {
    pub description: FeatureDescription,
    pub features: Vec<WeightedFeature>,
}

impl WeightedRandomFeature {
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.features.iter().map(|f| f.1).sum()
    }
}

/// Blocks a single-block feature may attach to, per face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MayAttachTo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_rotate: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sides_must_attach: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Vec<BlockDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Vec<BlockDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub north: Option<Vec<BlockDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub east: Option<Vec<BlockDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub south: Option<Vec<BlockDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub west: Option<Vec<BlockDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<BlockDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sides: Option<Vec<BlockDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagonal: Option<Vec<BlockDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleBlockFeature {
    pub description: FeatureDescription,
    pub places_block: BlockDescriptor,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_placement_rules: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_survivability_rules: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_attach_to: Option<MayAttachTo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_replace: Option<Vec<BlockDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OreReplaceRule {
    pub places_block: BlockDescriptor,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_replace: Option<Vec<BlockDescriptor>>,
}

/// Places a vein of blocks, replacing what is there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OreFeature {
    pub description: FeatureDescription,
    pub count: u32,
    pub replace_rules: Vec<OreReplaceRule>,

    /// Probability in `0..=1` that a block touching air is skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discard_chance_on_air_exposure: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarlyOut {
    FirstFailure,
    FirstSuccess,
}

/// Places every listed feature at the same position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateFeature {
    pub description: FeatureDescription,
    pub features: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_out: Option<EarlyOut>,
}
