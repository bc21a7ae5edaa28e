//! World generation features.
//!
//! A feature file holds exactly one feature body under a kind-specific key
//! (`minecraft:ore_feature`, `minecraft:feature_rules`, ...). Feature
//! identifiers may contain `/` in their name, which nests the output file in
//! subdirectories.

mod kinds;

pub use kinds::{
    AggregateFeature, BlockIntersection, ChanceFraction, Coordinate, CoordinateDistribution,
    CoordinateOrder, Distribution, DistributionType, EarlyOut, FacingDirection,
    FeatureDescription, FeatureRuleConditions, FeatureRules, FeatureRulesDescription,
    MayAttachTo, OreFeature, OreReplaceRule, PlacementPass, ScatterChance, ScatterFeature,
    SingleBlockFeature, StructureConstraints, StructureTemplateFeature, WeightedFeature,
    WeightedRandomFeature,
};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::storage::{ContentFile, ContentKind, FileLayout};

/// Format version written by [`FeatureFile::new`].
pub const FEATURE_FORMAT_VERSION: &str = "1.21.0";

/// Discriminator naming which body a feature file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    StructureTemplate,
    Rules,
    Scatter,
    WeightedRandom,
    SingleBlock,
    Ore,
    Aggregate,
}

impl FeatureKind {
    pub const ALL: [Self; 7] = [
        Self::StructureTemplate,
        Self::Rules,
        Self::Scatter,
        Self::WeightedRandom,
        Self::SingleBlock,
        Self::Ore,
        Self::Aggregate,
    ];

    /// The top-level JSON key of this kind.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::StructureTemplate => "minecraft:structure_template_feature",
            Self::Rules => "minecraft:feature_rules",
            Self::Scatter => "minecraft:scatter_feature",
            Self::WeightedRandom => "minecraft:weighted_random_feature",
            Self::SingleBlock => "minecraft:single_block_feature",
            Self::Ore => "minecraft:ore_feature",
            Self::Aggregate => "minecraft:aggregate_feature",
        }
    }

    /// Looks a kind up by its JSON key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "minecraft:structure_template_feature")]
    StructureTemplate(StructureTemplateFeature),

    #[serde(rename = "minecraft:feature_rules")]
    Rules(FeatureRules),

    #[serde(rename = "minecraft:scatter_feature")]
    Scatter(ScatterFeature),

    #[serde(rename = "minecraft:weighted_random_feature")]
    WeightedRandom(WeightedRandomFeature),

    #[serde(rename = "minecraft:single_block_feature")]
    SingleBlock(SingleBlockFeature),

    #[serde(rename = "minecraft:ore_feature")]
    Ore(OreFeature),

    #[serde(rename = "minecraft:aggregate_feature")]
    Aggregate(AggregateFeature),
}

impl Feature {
    #[must_use]
    pub const fn kind(&self) -> FeatureKind {
        match self {
            Self::StructureTemplate(_) => FeatureKind::StructureTemplate,
            Self::Rules(_) => FeatureKind::Rules,
            Self::Scatter(_) => FeatureKind::Scatter,
            Self::WeightedRandom(_) => FeatureKind::WeightedRandom,
            Self::SingleBlock(_) => FeatureKind::SingleBlock,
            Self::Ore(_) => FeatureKind::Ore,
            Self::Aggregate(_) => FeatureKind::Aggregate,
        }
    }

    /// The identifier nested inside the body's description.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::StructureTemplate(f) => &f.description.identifier,
            Self::Rules(f) => &f.description.identifier,
            Self::Scatter(f) => &f.description.identifier,
            Self::WeightedRandom(f) => &f.description.identifier,
            Self::SingleBlock(f) => &f.description.identifier,
            Self::Ore(f) => &f.description.identifier,
            Self::Aggregate(f) => &f.description.identifier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFile {
    pub format_version: String,

    #[serde(flatten)]
    pub feature: Feature,
}

impl FeatureFile {
    #[must_use]
    pub fn new(feature: Feature) -> Self {
        Self {
            format_version: FEATURE_FORMAT_VERSION.to_string(),
            feature,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FeatureKind {
        self.feature.kind()
    }
}

impl ContentFile for FeatureFile {
    const KIND: ContentKind = ContentKind::Feature;
    const LAYOUT: FileLayout = FileLayout::NESTED_IDENTIFIER;

    fn identifier(&self) -> Option<&str> {
        Some(self.feature.identifier())
    }
}
